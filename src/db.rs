/*! Sets up the application's database. */

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error,
    stores::sqlite::{create_goal_table, create_transaction_table},
};

/// Create the tables for the domain models if they do not exist yet.
///
/// Safe to call on a database that has already been initialised, the existing
/// records are left alone.
///
/// # Errors
/// Returns an [Error::SqlError] if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;
    create_goal_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;

    fn table_names(connection: &Connection) -> Vec<String> {
        connection
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('transaction', 'goal') ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn creates_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("could not initialize database");

        assert_eq!(table_names(&connection), vec!["goal", "transaction"]);
    }

    #[test]
    fn initialize_twice_keeps_records() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
            .execute("INSERT INTO goal (name, target_amount) VALUES ('Bike', 800)", [])
            .unwrap();

        initialize(&connection).expect("second initialize should succeed");

        let count: i64 = connection
            .query_row("SELECT COUNT(*) FROM goal", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn table_checks_reject_invalid_amounts() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        let result = connection.execute(
            "INSERT INTO \"transaction\" (type, category, amount, date) VALUES ('expense', 'Food', -1, '2024-01-01')",
            [],
        );

        assert!(result.is_err());
    }
}
