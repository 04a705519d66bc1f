//! The append-only log of time-off transactions.

mod core;
mod db;
mod page;

pub use core::{HistoryRecord, Method, NewHistoryRecord, TimeOffType, TransactId};
pub use db::{
    create_history_table, get_all_history, get_history_for_employee, insert_history_record,
};
pub use page::{get_history_page, history_table};
