//! Defines the transaction store trait.

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction, TransactionPatch},
};

/// Handles the creation, retrieval and modification of transactions.
pub trait TransactionStore {
    /// Store a new transaction and return it with its assigned ID.
    ///
    /// IDs are never reused, even after the transaction holding an ID is deleted.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve every transaction, most recent date first.
    ///
    /// Transactions on the same date are returned in the order they were created.
    fn list_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve a transaction by its ID, `None` if there is no such transaction.
    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error>;

    /// Apply `patch` to the stored transaction and return the updated transaction.
    ///
    /// Fields the patch leaves as `None` keep their stored value. Returns
    /// `None` if there is no transaction with the ID.
    fn update(
        &self,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> Result<Option<Transaction>, Error>;

    /// Delete a transaction, returning whether a transaction was removed.
    fn delete(&self, id: TransactionId) -> Result<bool, Error>;
}
