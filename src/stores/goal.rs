//! Defines the goal store trait.

use crate::{
    Error,
    database_id::GoalId,
    goal::{Goal, GoalPatch, NewGoal},
};

/// Handles the creation, retrieval and modification of savings goals.
pub trait GoalStore {
    /// Store a new goal and return it with its assigned ID.
    fn create(&self, goal: NewGoal) -> Result<Goal, Error>;

    /// Retrieve every goal, earliest deadline first.
    ///
    /// Goals without a deadline come after all goals with one. Goals with the
    /// same deadline are returned in the order they were created.
    fn list_all(&self) -> Result<Vec<Goal>, Error>;

    /// Retrieve a goal by its ID, `None` if there is no such goal.
    fn get(&self, id: GoalId) -> Result<Option<Goal>, Error>;

    /// Apply `patch` to the stored goal and return the updated goal.
    ///
    /// Returns `None` if there is no goal with the ID.
    fn update(&self, id: GoalId, patch: GoalPatch) -> Result<Option<Goal>, Error>;

    /// Delete a goal, returning whether a goal was removed.
    fn delete(&self, id: GoalId) -> Result<bool, Error>;
}
