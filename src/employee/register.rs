//! The page and endpoint for registering a new employee.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    alert::success_page,
    employee::{EmployeeForm, NewEmployee, create_employee},
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, radio_group, required_input},
    navigation::NavBar,
};

/// The state needed for registering an employee.
#[derive(Debug, Clone)]
pub struct EmployeeState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EmployeeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the employee registration page.
pub async fn get_employee_page() -> Response {
    employee_view().into_response()
}

/// Handle the employee registration form submission.
pub async fn register_employee_endpoint(
    State(state): State<EmployeeState>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, Error> {
    let new_employee = NewEmployee::try_from(form)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let employee = create_employee(new_employee, &connection)?;

    tracing::info!(
        "Registered employee {:?} with {} hours of PTO",
        employee.fullname,
        employee.start_pto
    );

    let details = format!(
        "{} starts with {} hours of PTO.",
        employee.fullname, employee.start_pto
    );

    Ok(success_page("New employee successfully added", &details).into_response())
}

fn employee_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::EMPLOYEE).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "New Employee" }

            form
                method="post"
                action=(endpoints::EMPLOYEE)
                class="w-full space-y-4 md:space-y-6"
            {
                (required_input("fullname", "Full Name", "text"))
                (radio_group("eligible", "Eligible for PTO", &[("yes", "Yes"), ("no", "No")]))
                (required_input("start_pto", "Starting PTO (hours)", "number"))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Employee" }
            }
        }
    };

    base("New Employee", &content)
}
