//! Implements a SQLite backed goal store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    Error,
    database_id::GoalId,
    goal::{Goal, GoalPatch, NewGoal},
    stores::{
        GoalStore,
        sqlite::{lock, update_with_patch},
    },
};

/// Stores savings goals in a SQLite database.
///
/// The goal table must exist, see [create_goal_table].
#[derive(Debug, Clone)]
pub struct SQLiteGoalStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteGoalStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl GoalStore for SQLiteGoalStore {
    fn create(&self, goal: NewGoal) -> Result<Goal, Error> {
        let connection = lock(&self.connection)?;

        let goal = connection
            .prepare(
                "INSERT INTO goal (name, target_amount, current_amount, deadline)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, name, target_amount, current_amount, deadline",
            )?
            .query_row(
                (
                    goal.name,
                    goal.target_amount,
                    goal.current_amount,
                    goal.deadline,
                ),
                map_goal_row,
            )?;

        Ok(goal)
    }

    /// Retrieve all goals by deadline, earliest first.
    ///
    /// SQLite sorts NULL before any text, so the `deadline IS NULL` term is
    /// what puts goals without a deadline last.
    fn list_all(&self) -> Result<Vec<Goal>, Error> {
        let connection = lock(&self.connection)?;

        connection
            .prepare(
                "SELECT id, name, target_amount, current_amount, deadline FROM goal
                 ORDER BY deadline IS NULL, deadline ASC, id ASC",
            )?
            .query_map([], map_goal_row)?
            .map(|maybe_goal| maybe_goal.map_err(Error::from))
            .collect()
    }

    fn get(&self, id: GoalId) -> Result<Option<Goal>, Error> {
        let connection = lock(&self.connection)?;

        select_goal(&connection, id)
    }

    fn update(&self, id: GoalId, patch: GoalPatch) -> Result<Option<Goal>, Error> {
        let connection = lock(&self.connection)?;

        update_with_patch(&connection, id, patch, select_goal, write_goal)
    }

    fn delete(&self, id: GoalId) -> Result<bool, Error> {
        let connection = lock(&self.connection)?;

        let rows_affected = connection.execute("DELETE FROM goal WHERE id = ?1", [id])?;

        Ok(rows_affected > 0)
    }
}

fn select_goal(connection: &Connection, id: GoalId) -> Result<Option<Goal>, Error> {
    connection
        .prepare(
            "SELECT id, name, target_amount, current_amount, deadline FROM goal WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_goal_row)
        .optional()
        .map_err(Error::from)
}

fn write_goal(connection: &Connection, goal: &Goal) -> Result<(), Error> {
    connection.execute(
        "UPDATE goal SET name = ?1, target_amount = ?2, current_amount = ?3, deadline = ?4
         WHERE id = ?5",
        params![
            goal.name,
            goal.target_amount,
            goal.current_amount,
            goal.deadline,
            goal.id,
        ],
    )?;

    Ok(())
}

/// Create the goal table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_goal_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS goal (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            target_amount REAL NOT NULL CHECK(target_amount > 0),
            current_amount REAL NOT NULL DEFAULT 0 CHECK(current_amount >= 0),
            deadline TEXT
        );",
    )?;

    Ok(())
}

fn map_goal_row(row: &Row) -> Result<Goal, rusqlite::Error> {
    Ok(Goal {
        id: row.get(0)?,
        name: row.get(1)?,
        target_amount: row.get(2)?,
        current_amount: row.get(3)?,
        deadline: row.get(4)?,
    })
}
