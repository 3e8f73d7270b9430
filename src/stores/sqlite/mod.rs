//! SQLite backed implementations of the record stores.
//!
//! All stores share one connection behind a mutex, which serialises writes and
//! keeps ID assignment unique.

mod goal;
mod transaction;

pub use goal::{SQLiteGoalStore, create_goal_table};
pub use transaction::{SQLiteTransactionStore, create_transaction_table};

use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{Error, database_id::DatabaseId, merge::Patch};

/// Acquire the shared database connection.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if the lock is poisoned.
fn lock(connection: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, Error> {
    connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)
}

/// Read a record, lay `patch` over it and write it back as one atomic unit.
///
/// Returns `None` without writing anything if `select` finds no record with `id`.
fn update_with_patch<R, P>(
    connection: &Connection,
    id: DatabaseId,
    patch: P,
    select: fn(&Connection, DatabaseId) -> Result<Option<R>, Error>,
    write: fn(&Connection, &R) -> Result<(), Error>,
) -> Result<Option<R>, Error>
where
    P: Patch<R>,
{
    // Using unchecked_transaction because we only have &Connection from the MutexGuard.
    let transaction = connection.unchecked_transaction()?;

    let Some(existing) = select(&transaction, id)? else {
        return Ok(None);
    };

    let merged = patch.merge(existing);
    write(&transaction, &merged)?;

    transaction.commit()?;

    Ok(Some(merged))
}
