//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row, params, types::Type};

use crate::{
    Error,
    database_id::TransactionId,
    stores::{
        TransactionStore,
        sqlite::{lock, update_with_patch},
    },
    transaction::{NewTransaction, Transaction, TransactionPatch, TransactionType},
};

/// Stores transactions in a SQLite database.
///
/// The transaction table must exist, see [create_transaction_table].
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the database lock is poisoned,
    /// - or [Error::SqlError] if there is some SQL error.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = lock(&self.connection)?;

        let transaction = connection
            .prepare(
                "INSERT INTO \"transaction\" (type, category, amount, date, description)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, type, category, amount, date, description",
            )?
            .query_row(
                (
                    transaction.kind.as_str(),
                    transaction.category,
                    transaction.amount,
                    transaction.date,
                    transaction.description,
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve all transactions ordered by date, most recent first.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn list_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = lock(&self.connection)?;

        connection
            .prepare(
                "SELECT id, type, category, amount, date, description FROM \"transaction\"
                 ORDER BY date DESC, id ASC",
            )?
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        let connection = lock(&self.connection)?;

        select_transaction(&connection, id)
    }

    fn update(
        &self,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> Result<Option<Transaction>, Error> {
        let connection = lock(&self.connection)?;

        update_with_patch(&connection, id, patch, select_transaction, write_transaction)
    }

    fn delete(&self, id: TransactionId) -> Result<bool, Error> {
        let connection = lock(&self.connection)?;

        let rows_affected = connection.execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &id)],
        )?;

        Ok(rows_affected > 0)
    }
}

fn select_transaction(
    connection: &Connection,
    id: TransactionId,
) -> Result<Option<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM \"transaction\"
             WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)
        .optional()
        .map_err(Error::from)
}

fn write_transaction(connection: &Connection, transaction: &Transaction) -> Result<(), Error> {
    connection.execute(
        "UPDATE \"transaction\"
         SET type = ?1, category = ?2, amount = ?3, date = ?4, description = ?5
         WHERE id = ?6",
        params![
            transaction.kind.as_str(),
            transaction.category,
            transaction.amount,
            transaction.date,
            transaction.description,
            transaction.id,
        ],
    )?;

    Ok(())
}

/// Create the transaction table in the database.
///
/// `AUTOINCREMENT` stops SQLite from reusing the IDs of deleted rows.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL CHECK(type IN ('income', 'expense')),
            category TEXT NOT NULL,
            amount REAL NOT NULL CHECK(amount > 0),
            date TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let raw_kind: String = row.get(1)?;
    let kind = raw_kind.parse::<TransactionType>().map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(error))
    })?;

    Ok(Transaction {
        id: row.get(0)?,
        kind,
        category: row.get(2)?,
        amount: row.get(3)?,
        date: row.get(4)?,
        description: row.get(5)?,
    })
}
