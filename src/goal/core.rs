//! Core goal domain types.

use serde::{Deserialize, Serialize};

use crate::{database_id::GoalId, merge::impl_patch};

/// A savings target and the progress made towards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The ID of the goal.
    pub id: GoalId,
    /// What the user is saving for.
    pub name: String,
    /// The amount to save, greater than zero.
    pub target_amount: f64,
    /// The amount saved so far, zero or greater. May exceed the target.
    pub current_amount: f64,
    /// When the goal should be reached as an ISO 8601 date, if at all.
    pub deadline: Option<String>,
}

impl Goal {
    /// Create a new goal with nothing saved and no deadline.
    pub fn build(name: &str, target_amount: f64) -> NewGoal {
        NewGoal {
            name: name.to_owned(),
            target_amount,
            current_amount: 0.0,
            deadline: None,
        }
    }
}

/// A goal that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    /// A non-empty name.
    pub name: String,
    /// The amount to save, greater than zero.
    pub target_amount: f64,
    /// The amount saved so far, zero or greater.
    pub current_amount: f64,
    /// The deadline as an ISO 8601 date, if any.
    pub deadline: Option<String>,
}

impl NewGoal {
    /// Set the amount saved so far.
    pub fn current_amount(mut self, current_amount: f64) -> Self {
        self.current_amount = current_amount;
        self
    }

    /// Set the deadline.
    pub fn deadline(mut self, deadline: &str) -> Self {
        self.deadline = Some(deadline.to_owned());
        self
    }
}

/// The fields to change on a stored goal, `None` keeps the stored value.
///
/// `deadline: Some(None)` clears the deadline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalPatch {
    /// The new name.
    pub name: Option<String>,
    /// The new target, greater than zero.
    pub target_amount: Option<f64>,
    /// The new amount saved, zero or greater.
    pub current_amount: Option<f64>,
    /// `Some(None)` removes the deadline.
    pub deadline: Option<Option<String>>,
}

impl_patch!(GoalPatch => Goal { name, target_amount, current_amount, deadline });
