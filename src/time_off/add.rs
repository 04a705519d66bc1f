//! The page and endpoint for adding earned PTO hours to an employee.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    alert::success_page,
    employee::{add_earned_pto, get_employee_by_name, get_employee_names},
    endpoints,
    history::{Method, NewHistoryRecord, TimeOffType, TransactId, insert_history_record},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, employee_select, required_input},
    navigation::NavBar,
    time_off::{
        TimeOffState,
        hours::{check_counters, parse_hours},
    },
};

/// The raw form data for adding hours.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AddForm {
    pub employee: String,
    pub hours: String,
    pub reason: String,
}

/// Earned hours that have been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EarnedHours {
    fullname: String,
    hours: i64,
    reason: String,
}

impl TryFrom<AddForm> for EarnedHours {
    type Error = Error;

    fn try_from(form: AddForm) -> Result<Self, Self::Error> {
        let fullname = form.employee.trim();
        let hours = form.hours.trim();
        let reason = form.reason.trim();

        if fullname.is_empty() || hours.is_empty() || reason.is_empty() {
            return Err(Error::MissingInformation);
        }

        Ok(Self {
            fullname: fullname.to_owned(),
            hours: parse_hours(hours)?,
            reason: reason.to_owned(),
        })
    }
}

/// Render the page for adding hours.
pub async fn get_add_page(State(state): State<TimeOffState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let employee_names = get_employee_names(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve employee names: {error}"))?;

    Ok(add_view(&employee_names).into_response())
}

/// Handle the form for adding hours.
pub async fn add_hours_endpoint(
    State(state): State<TimeOffState>,
    Form(form): Form<AddForm>,
) -> Result<Response, Error> {
    let earned_hours = EarnedHours::try_from(form)?;

    let mut connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transact_id = record_earned_hours(&earned_hours, &mut connection)?;

    tracing::info!(
        "Added {} hours of PTO to {:?} (transaction {transact_id})",
        earned_hours.hours,
        earned_hours.fullname
    );

    let details = format!(
        "Transaction #{transact_id}: added {} paid hours for {}.",
        earned_hours.hours, earned_hours.fullname
    );

    Ok(success_page("Employee PTO hours updated", &details).into_response())
}

/// Update the employee's balance and log the transaction as one unit.
fn record_earned_hours(
    earned_hours: &EarnedHours,
    connection: &mut Connection,
) -> Result<TransactId, Error> {
    let transaction = connection.transaction()?;

    let employee = get_employee_by_name(&earned_hours.fullname, &transaction)?;
    check_counters(
        &[employee.pto_left, employee.pto_earned],
        &[],
        earned_hours.hours,
    )?;
    add_earned_pto(employee.id, earned_hours.hours, &transaction)?;
    let transact_id = insert_history_record(
        &NewHistoryRecord {
            employee_id: employee.id,
            hours: earned_hours.hours,
            time_off_type: TimeOffType::Paid,
            method: Method::Added,
            reason: earned_hours.reason.clone(),
            start_date: None,
            end_date: None,
        },
        &transaction,
    )?;

    transaction.commit()?;

    Ok(transact_id)
}

fn add_view(employee_names: &[String]) -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Add Earned PTO" }

            form
                method="post"
                action=(endpoints::ADD)
                class="w-full space-y-4 md:space-y-6"
            {
                (employee_select(employee_names))
                (required_input("hours", "Hours", "number"))
                (required_input("reason", "Reason", "text"))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Hours" }
            }
        }
    };

    base("Add Hours", &content)
}
