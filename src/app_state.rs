//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, policy::NegativeBalancePolicy};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,

    /// Whether paid time off may take an employee's PTO balance below zero.
    pub negative_balance_policy: NegativeBalancePolicy,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// employees and their time-off history if they do not already exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(
        db_connection: Connection,
        negative_balance_policy: NegativeBalancePolicy,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            negative_balance_policy,
        })
    }
}
