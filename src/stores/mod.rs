//! Contains traits and implementations for objects that store the domain models.
//!
//! Each record kind has its own store trait. Stores hand out owned records and
//! report a missing ID as `None` or `false` rather than as an error, so that
//! callers can tell "not found" apart from a storage failure.

mod goal;
mod transaction;

pub mod sqlite;

pub use goal::GoalStore;
pub use transaction::TransactionStore;
