//! Checks for incoming payloads, run before anything is written to the store.
//!
//! The entity-specific rules live next to each payload type (see
//! [crate::transaction::TransactionPayload] and [crate::goal::GoalPayload]);
//! this module holds the error classification and the field-level helpers they
//! share.

use std::fmt::Display;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Why a payload was rejected.
///
/// Each variant names the offending field so that the client can tell which
/// input to fix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent, null or blank.
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    /// A numeric field could not be read as a finite number.
    #[error("invalid number format for \"{field}\": {value}")]
    InvalidFormat {
        /// The name of the field.
        field: &'static str,
        /// The value as it was received.
        value: String,
    },

    /// A numeric field was a number but broke its range constraint.
    #[error("\"{field}\" must be {bound}, got {value}")]
    InvalidRange {
        /// The name of the field.
        field: &'static str,
        /// The constraint that was violated.
        bound: Bound,
        /// The parsed value.
        value: f64,
    },

    /// The transaction type was not one of the permitted values.
    #[error("invalid transaction type \"{0}\", expected \"income\" or \"expense\"")]
    InvalidEnum(String),
}

/// The range a numeric field must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    NonNegative,
}

impl Bound {
    fn contains(self, value: f64) -> bool {
        match self {
            Bound::Positive => value > 0.0,
            Bound::NonNegative => value >= 0.0,
        }
    }
}

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Positive => write!(f, "greater than zero"),
            Bound::NonNegative => write!(f, "zero or greater"),
        }
    }
}

/// Unwrap a field that must be present.
///
/// # Errors
/// Returns [ValidationError::MissingField] if `value` is `None`.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Check that a text label has some content. The label is kept as sent.
///
/// # Errors
/// Returns [ValidationError::MissingField] if `text` is empty or only whitespace.
pub fn label(field: &'static str, text: String) -> Result<String, ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(text)
    }
}

/// Read a JSON number, or a JSON string holding a number, as an amount within `bound`.
///
/// # Errors
/// Returns a:
/// - [ValidationError::InvalidFormat] if `value` is not a finite number or numeric text,
/// - or [ValidationError::InvalidRange] if the number is outside `bound`.
pub fn parse_amount(field: &'static str, value: &Value, bound: Bound) -> Result<f64, ValidationError> {
    let invalid_format = || ValidationError::InvalidFormat {
        field,
        value: value.to_string(),
    };

    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite())
    .ok_or_else(invalid_format)?;

    if bound.contains(number) {
        Ok(number)
    } else {
        Err(ValidationError::InvalidRange {
            field,
            bound,
            value: number,
        })
    }
}

/// Deserialize a field so that an explicit `null` can be told apart from an
/// absent key.
///
/// Use together with `#[serde(default)]`: an absent key gives `None`, `null`
/// gives `Some(None)` and a value gives `Some(Some(value))`.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
