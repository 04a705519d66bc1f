//! The landing page listing every time-off transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::Date;

use crate::{
    AppState, Error, endpoints,
    history::{HistoryRecord, Method, get_all_history},
    html::{
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    navigation::NavBar,
};

/// The state needed for the history page.
#[derive(Debug, Clone)]
pub struct HistoryState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for HistoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Route handler for the page listing all transactions, newest first.
pub async fn get_history_page(State(state): State<HistoryState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let history = get_all_history(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve history: {error}"))?;

    Ok(history_view(&history).into_response())
}

fn history_view(history: &[HistoryRecord]) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 lg:max-w-5xl lg:w-full lg:mx-auto"
            {
                h1 class="text-xl font-bold" { "Time Off History" }

                (history_table(history))
            }
        }
    );

    base("History", &content)
}

/// A table of transactions in the order given.
pub fn history_table(history: &[HistoryRecord]) -> Markup {
    let optional_date = |date: Option<Date>| date.map(|date| date.to_string()).unwrap_or_default();

    let table_row = |record: &HistoryRecord| {
        let sign = match record.method {
            Method::Added => "+",
            Method::Subtracted => "-",
        };

        html!(
            tr class=(TABLE_ROW_STYLE) data-transact-id=(record.transact_id)
            {
                td class=(TABLE_CELL_STYLE) { (record.transact_id) }
                th scope="row" class=(TABLE_CELL_STYLE) { (record.fullname) }
                td class=(TABLE_CELL_STYLE) { (sign) (record.hours) }
                td class=(TABLE_CELL_STYLE) { (record.time_off_type) }
                td class=(TABLE_CELL_STYLE) { (record.method) }
                td class=(TABLE_CELL_STYLE) { (record.reason) }
                td class=(TABLE_CELL_STYLE) { (optional_date(record.start_date)) }
                td class=(TABLE_CELL_STYLE) { (optional_date(record.end_date)) }
            }
        )
    };

    html!(
        div class="relative overflow-x-auto shadow-md sm:rounded-lg"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Employee" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Hours" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Method" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Reason" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Start" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "End" }
                    }
                }

                tbody
                {
                    @for record in history {
                        (table_row(record))
                    }

                    @if history.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td colspan="8" class="px-6 py-4 text-center"
                            {
                                "No time off has been recorded yet."
                            }
                        }
                    }
                }
            }
        }
    )
}
