//! Creates the tables for the application's database.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{employee::create_employee_table, history::create_history_table};

/// Create the tables for employees and their time-off history.
///
/// Tables are only created if they do not exist, so this is safe to call on
/// every start up. Foreign key enforcement is switched on for `connection`.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_employee_table(&transaction)?;
    create_history_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
