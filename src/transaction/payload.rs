//! The JSON payload for creating and updating transactions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    transaction::{NewTransaction, TransactionPatch, TransactionType},
    validation::{Bound, ValidationError, label, parse_amount, required},
};

/// Transaction fields as received from the client.
///
/// Every field is optional here so that the same payload serves both creation
/// (where most fields are required) and partial updates. A `null` value is
/// treated the same as an absent key.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransactionPayload {
    /// Either "income" or "expense". Any other JSON value is kept so that it
    /// can be reported as an unknown type.
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    /// The category label.
    pub category: Option<String>,
    /// A number, or a string containing a number.
    pub amount: Option<Value>,
    /// An ISO 8601 date.
    pub date: Option<String>,
    /// Free text.
    pub description: Option<String>,
}

impl TransactionPayload {
    /// Validate the payload for creating a transaction.
    ///
    /// The type, category, amount and date are required, the description
    /// defaults to an empty string.
    ///
    /// # Errors
    /// Returns a:
    /// - [ValidationError::MissingField] if a required field is absent or blank,
    /// - [ValidationError::InvalidFormat] if the amount is not a number,
    /// - [ValidationError::InvalidRange] if the amount is not greater than zero,
    /// - or [ValidationError::InvalidEnum] if the type is not "income" or "expense".
    pub fn into_new_transaction(self) -> Result<NewTransaction, ValidationError> {
        let kind = required("type", self.kind)?;
        let category = required("category", self.category)?;
        let raw_amount = required("amount", self.amount)?;
        let date = required("date", self.date)?;

        let amount = parse_amount("amount", &raw_amount, Bound::Positive)?;
        let kind = parse_kind(&kind)?;
        let category = label("category", category)?;

        Ok(NewTransaction {
            kind,
            category,
            amount,
            date,
            description: self.description.unwrap_or_default(),
        })
    }

    /// Validate the payload for updating a transaction.
    ///
    /// Only the fields that were supplied are checked, with the same rules as
    /// [TransactionPayload::into_new_transaction].
    ///
    /// # Errors
    /// Returns the same errors as [TransactionPayload::into_new_transaction],
    /// except that absent fields are never an error.
    pub fn into_patch(self) -> Result<TransactionPatch, ValidationError> {
        let amount = self
            .amount
            .map(|raw_amount| parse_amount("amount", &raw_amount, Bound::Positive))
            .transpose()?;
        let kind = self.kind.as_ref().map(parse_kind).transpose()?;
        let category = self
            .category
            .map(|category| label("category", category))
            .transpose()?;

        Ok(TransactionPatch {
            kind,
            category,
            amount,
            date: self.date,
            description: self.description,
        })
    }
}

/// Read a transaction type from a JSON string. Numbers, booleans, arrays and
/// objects are never a known type.
fn parse_kind(value: &Value) -> Result<TransactionType, ValidationError> {
    match value {
        Value::String(text) => text.parse(),
        other => Err(ValidationError::InvalidEnum(other.to_string())),
    }
}
