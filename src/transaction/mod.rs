//! Transactions: the income and expense records, their validation and their endpoints.

mod core;
mod handlers;
mod payload;

pub use core::{NewTransaction, Transaction, TransactionPatch, TransactionType};
pub use handlers::{
    DeleteResponse, create_transaction_endpoint, delete_transaction_endpoint,
    get_transaction_endpoint, list_transactions_endpoint, update_transaction_endpoint,
};
pub use payload::TransactionPayload;
