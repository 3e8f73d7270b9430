//! The JSON payload for creating and updating goals.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    goal::{GoalPatch, NewGoal},
    validation::{Bound, ValidationError, deserialize_present, label, parse_amount, required},
};

/// Goal fields as received from the client.
///
/// `null` is the same as an absent key, except for `deadline` where `null`
/// means "no deadline".
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GoalPayload {
    /// What the user is saving for.
    pub name: Option<String>,
    /// A number, or a string containing a number.
    pub target_amount: Option<Value>,
    /// A number, or a string containing a number.
    pub current_amount: Option<Value>,
    /// An ISO 8601 date, absent, or `null` for no deadline.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<Option<String>>,
}

impl GoalPayload {
    /// Validate the payload for creating a goal.
    ///
    /// The name and target amount are required. The current amount defaults
    /// to zero and the deadline to none.
    ///
    /// # Errors
    /// Returns a:
    /// - [ValidationError::MissingField] if the name or target amount is absent or blank,
    /// - [ValidationError::InvalidFormat] if an amount is not a number,
    /// - or [ValidationError::InvalidRange] if the target is not greater than
    ///   zero or the current amount is negative.
    pub fn into_new_goal(self) -> Result<NewGoal, ValidationError> {
        let name = required("name", self.name)?;
        let raw_target_amount = required("target_amount", self.target_amount)?;

        let target_amount = parse_amount("target_amount", &raw_target_amount, Bound::Positive)?;
        let current_amount = self
            .current_amount
            .map(|raw_amount| parse_amount("current_amount", &raw_amount, Bound::NonNegative))
            .transpose()?
            .unwrap_or(0.0);
        let name = label("name", name)?;

        Ok(NewGoal {
            name,
            target_amount,
            current_amount,
            deadline: self.deadline.and_then(normalise_deadline),
        })
    }

    /// Validate the payload for updating a goal.
    ///
    /// Supplied fields are checked with the same rules as
    /// [GoalPayload::into_new_goal]. Stored values already meet those rules,
    /// so the record that results from merging the patch does too.
    ///
    /// # Errors
    /// Returns the same errors as [GoalPayload::into_new_goal], except that
    /// absent fields are never an error.
    pub fn into_patch(self) -> Result<GoalPatch, ValidationError> {
        let target_amount = self
            .target_amount
            .map(|raw_amount| parse_amount("target_amount", &raw_amount, Bound::Positive))
            .transpose()?;
        let current_amount = self
            .current_amount
            .map(|raw_amount| parse_amount("current_amount", &raw_amount, Bound::NonNegative))
            .transpose()?;
        let name = self.name.map(|name| label("name", name)).transpose()?;

        Ok(GoalPatch {
            name,
            target_amount,
            current_amount,
            deadline: self.deadline.map(normalise_deadline),
        })
    }
}

/// A blank deadline, as sent by an empty date input, means no deadline.
fn normalise_deadline(deadline: Option<String>) -> Option<String> {
    deadline.filter(|deadline| !deadline.trim().is_empty())
}
