use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{AppState, policy::NegativeBalancePolicy};

/// The state needed for adding and subtracting hours.
#[derive(Debug, Clone)]
pub struct TimeOffState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub negative_balance_policy: NegativeBalancePolicy,
}

impl FromRef<AppState> for TimeOffState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            negative_balance_policy: state.negative_balance_policy,
        }
    }
}
