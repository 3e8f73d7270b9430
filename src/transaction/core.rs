//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{database_id::TransactionId, merge::impl_patch, validation::ValidationError};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    Expense,
}

impl TransactionType {
    /// The text used for this type in payloads and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    /// Parse a transaction type, which must match exactly (no trimming or case folding).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(ValidationError::InvalidEnum(other.to_owned())),
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// A user-defined label, e.g. "Groceries", "Rent", "Salary".
    pub category: String,
    /// The amount of money spent or earned, always greater than zero.
    pub amount: f64,
    /// When the transaction happened as an ISO 8601 date, e.g. "2024-01-31".
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: String,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [NewTransaction] for discoverability. The description
    /// defaults to an empty string.
    pub fn build(kind: TransactionType, category: &str, amount: f64, date: &str) -> NewTransaction {
        NewTransaction {
            kind,
            category: category.to_owned(),
            amount,
            date: date.to_owned(),
            description: String::new(),
        }
    }
}

/// A transaction that has not been stored yet and so has no ID.
///
/// Values should come from [crate::transaction::TransactionPayload::into_new_transaction]
/// or [Transaction::build], the store does not check them.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Whether the transaction is income or an expense.
    pub kind: TransactionType,
    /// A non-empty, user-defined label.
    pub category: String,
    /// The amount of money, greater than zero.
    pub amount: f64,
    /// When the transaction happened as an ISO 8601 date.
    pub date: String,
    /// A text description, may be empty.
    pub description: String,
}

impl NewTransaction {
    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }
}

/// The fields to change on a stored transaction, `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    /// The new transaction type.
    pub kind: Option<TransactionType>,
    /// The new category.
    pub category: Option<String>,
    /// The new amount, greater than zero.
    pub amount: Option<f64>,
    /// The new date.
    pub date: Option<String>,
    /// The new description.
    pub description: Option<String>,
}

impl_patch!(TransactionPatch => Transaction { kind, category, amount, date, description });

#[cfg(test)]
mod tests {
    use crate::{
        merge::Patch,
        transaction::{Transaction, TransactionPatch, TransactionType},
        validation::ValidationError,
    };

    #[test]
    fn parses_transaction_types() {
        assert_eq!("income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("expense".parse::<TransactionType>(), Ok(TransactionType::Expense));
    }

    #[test]
    fn rejects_unknown_transaction_types() {
        for text in ["Income", " expense", "transfer", ""] {
            assert_eq!(
                text.parse::<TransactionType>(),
                Err(ValidationError::InvalidEnum(text.to_owned()))
            );
        }
    }

    #[test]
    fn serializes_kind_as_type() {
        let transaction = Transaction {
            id: 1,
            kind: TransactionType::Expense,
            category: "Food".to_owned(),
            amount: 12.5,
            date: "2024-01-02".to_owned(),
            description: String::new(),
        };

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "type": "expense",
                "category": "Food",
                "amount": 12.5,
                "date": "2024-01-02",
                "description": ""
            })
        );
    }

    #[test]
    fn patch_only_changes_supplied_fields() {
        let existing = Transaction {
            id: 3,
            kind: TransactionType::Income,
            category: "Salary".to_owned(),
            amount: 1000.0,
            date: "2024-01-01".to_owned(),
            description: "January".to_owned(),
        };
        let patch = TransactionPatch {
            amount: Some(1100.0),
            ..Default::default()
        };

        let merged = patch.merge(existing.clone());

        assert_eq!(
            merged,
            Transaction {
                amount: 1100.0,
                ..existing
            }
        );
    }
}
