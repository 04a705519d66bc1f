//! The page for viewing one employee's time-off totals and history.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    employee::{Employee, get_employee_by_name, get_employee_names},
    endpoints,
    history::{HistoryRecord, get_history_for_employee, history_table},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, base, employee_select},
    navigation::NavBar,
};

/// The state needed for the totals page.
#[derive(Debug, Clone)]
pub struct TotalsState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TotalsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data for choosing whose totals to view.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalsForm {
    pub employee: String,
}

/// Render the page for choosing an employee.
pub async fn get_totals_page(State(state): State<TotalsState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let employee_names = get_employee_names(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve employee names: {error}"))?;

    Ok(select_employee_view(&employee_names).into_response())
}

/// Render the totals and history for the employee chosen in the form.
pub async fn get_employee_totals(
    State(state): State<TotalsState>,
    Form(form): Form<TotalsForm>,
) -> Result<Response, Error> {
    let fullname = form.employee.trim();

    if fullname.is_empty() {
        return Err(Error::MissingEmployeeSelection);
    }

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let employee = get_employee_by_name(fullname, &connection)?;
    let history = get_history_for_employee(employee.id, &connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve history: {error}"))?;

    Ok(totals_view(&employee, &history).into_response())
}

fn select_employee_view(employee_names: &[String]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TOTALS).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Employee Totals" }

            form
                method="post"
                action=(endpoints::TOTALS)
                class="w-full space-y-4 md:space-y-6"
            {
                (employee_select(employee_names))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "View Totals" }
            }
        }
    };

    base("Totals", &content)
}

fn totals_view(employee: &Employee, history: &[HistoryRecord]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TOTALS).into_html();
    let counters = [
        ("Eligible", employee.eligible.clone()),
        ("Starting PTO", employee.start_pto.to_string()),
        ("PTO Earned", employee.pto_earned.to_string()),
        ("PTO Used", employee.pto_used.to_string()),
        ("PTO Left", employee.pto_left.to_string()),
        ("UTO Used", employee.uto_used.to_string()),
    ];

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 lg:max-w-5xl lg:w-full lg:mx-auto"
            {
                h1 class="text-xl font-bold" { (employee.fullname) }

                dl class="grid grid-cols-2 md:grid-cols-3 gap-4"
                {
                    @for (label, value) in counters {
                        div class="p-4 bg-white rounded-lg shadow dark:bg-gray-800"
                        {
                            dt class="text-sm text-gray-500 dark:text-gray-400" { (label) }
                            dd class="text-2xl font-semibold" { (value) }
                        }
                    }
                }

                h2 class="text-lg font-bold" { "History" }

                (history_table(history))
            }
        }
    };

    base(&format!("Totals for {}", employee.fullname), &content)
}
