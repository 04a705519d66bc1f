//! The page and endpoint for subtracting paid or unpaid time off taken by an employee.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    alert::success_page,
    employee::{add_used_pto, add_used_uto, get_employee_by_name, get_employee_names},
    endpoints,
    history::{Method, NewHistoryRecord, TimeOffType, TransactId, insert_history_record},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, employee_select, radio_group,
        required_input,
    },
    navigation::NavBar,
    policy::NegativeBalancePolicy,
    time_off::{
        TimeOffState,
        hours::{check_counters, parse_hours},
    },
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The raw form data for subtracting hours.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtractForm {
    pub employee: String,
    pub hours: String,
    pub start: String,
    pub end: String,
    pub reason: String,
    #[serde(rename = "type")]
    pub time_off_type: String,
}

/// Time off taken that has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TimeOffTaken {
    fullname: String,
    hours: i64,
    time_off_type: TimeOffType,
    start_date: Date,
    end_date: Date,
    reason: String,
}

impl TryFrom<SubtractForm> for TimeOffTaken {
    type Error = Error;

    fn try_from(form: SubtractForm) -> Result<Self, Self::Error> {
        let fields = [
            form.employee.trim(),
            form.hours.trim(),
            form.start.trim(),
            form.end.trim(),
            form.reason.trim(),
            form.time_off_type.trim(),
        ];

        if fields.iter().any(|field| field.is_empty()) {
            return Err(Error::MissingSubtractInformation);
        }

        let [fullname, hours, start, end, reason, time_off_type] = fields;

        let hours = parse_hours(hours)?;
        let time_off_type = time_off_type.parse::<TimeOffType>()?;
        let start_date = parse_date(start)?;
        let end_date = parse_date(end)?;

        if end_date < start_date {
            return Err(Error::InvalidDateRange);
        }

        Ok(Self {
            fullname: fullname.to_owned(),
            hours,
            time_off_type,
            start_date,
            end_date,
            reason: reason.to_owned(),
        })
    }
}

fn parse_date(raw: &str) -> Result<Date, Error> {
    Date::parse(raw, DATE_FORMAT).map_err(|_| Error::InvalidDateRange)
}

/// Render the page for subtracting hours.
pub async fn get_subtract_page(State(state): State<TimeOffState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let employee_names = get_employee_names(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve employee names: {error}"))?;

    Ok(subtract_view(&employee_names).into_response())
}

/// Handle the form for subtracting hours.
pub async fn subtract_hours_endpoint(
    State(state): State<TimeOffState>,
    Form(form): Form<SubtractForm>,
) -> Result<Response, Error> {
    let time_off = TimeOffTaken::try_from(form)?;

    let mut connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transact_id =
        record_time_off(&time_off, state.negative_balance_policy, &mut connection)?;

    tracing::info!(
        "Subtracted {} {} hours from {:?} (transaction {transact_id})",
        time_off.hours,
        time_off.time_off_type,
        time_off.fullname
    );

    let details = format!(
        "Transaction #{transact_id}: subtracted {} {} hours for {}.",
        time_off.hours, time_off.time_off_type, time_off.fullname
    );

    Ok(success_page("Employee hours updated", &details).into_response())
}

/// Update the employee's balance and log the transaction as one unit.
fn record_time_off(
    time_off: &TimeOffTaken,
    policy: NegativeBalancePolicy,
    connection: &mut Connection,
) -> Result<TransactId, Error> {
    let transaction = connection.transaction()?;

    let employee = get_employee_by_name(&time_off.fullname, &transaction)?;

    match time_off.time_off_type {
        TimeOffType::Paid => {
            policy.check(employee.pto_left, time_off.hours)?;
            check_counters(&[employee.pto_used], &[employee.pto_left], time_off.hours)?;
            add_used_pto(employee.id, time_off.hours, &transaction)?;
        }
        TimeOffType::Unpaid => {
            check_counters(&[employee.uto_used], &[], time_off.hours)?;
            add_used_uto(employee.id, time_off.hours, &transaction)?;
        }
    }

    let transact_id = insert_history_record(
        &NewHistoryRecord {
            employee_id: employee.id,
            hours: time_off.hours,
            time_off_type: time_off.time_off_type,
            method: Method::Subtracted,
            reason: time_off.reason.clone(),
            start_date: Some(time_off.start_date),
            end_date: Some(time_off.end_date),
        },
        &transaction,
    )?;

    transaction.commit()?;

    Ok(transact_id)
}

fn subtract_view(employee_names: &[String]) -> Markup {
    let nav_bar = NavBar::new(endpoints::SUBTRACT).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Subtract Time Off" }

            form
                method="post"
                action=(endpoints::SUBTRACT)
                class="w-full space-y-4 md:space-y-6"
            {
                (employee_select(employee_names))
                (radio_group("type", "Type", &[("paid", "Paid (PTO)"), ("unpaid", "Unpaid (UTO)")]))
                (required_input("hours", "Hours", "number"))
                (required_input("start", "Start Date", "date"))
                (required_input("end", "End Date", "date"))
                (required_input("reason", "Reason", "text"))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Subtract Hours" }
            }
        }
    };

    base("Subtract Hours", &content)
}

#[cfg(test)]
mod subtract_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Form, extract::State, http::StatusCode};
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        employee::{Employee, NewEmployee, create_employee, get_employee_by_name},
        endpoints,
        history::{Method, TimeOffType, get_all_history},
        policy::NegativeBalancePolicy,
        test_utils::{
            assert_form_attribute, assert_form_input, assert_form_submit_button,
            assert_valid_html, get_alert_details, must_get_alert_text, must_get_form,
            parse_html_document,
        },
        time_off::{SubtractForm, TimeOffState, get_subtract_page, subtract_hours_endpoint},
    };

    fn get_test_state(policy: NegativeBalancePolicy) -> TimeOffState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        create_employee(
            NewEmployee {
                fullname: "Alice".to_owned(),
                eligible: "yes".to_owned(),
                start_pto: 40,
            },
            &connection,
        )
        .unwrap();

        TimeOffState {
            db_connection: Arc::new(Mutex::new(connection)),
            negative_balance_policy: policy,
        }
    }

    fn must_get_alice(state: &TimeOffState) -> Employee {
        get_employee_by_name("Alice", &state.db_connection.lock().unwrap())
            .expect("Could not get Alice")
    }

    fn vacation_form() -> SubtractForm {
        SubtractForm {
            employee: "Alice".to_owned(),
            hours: "10".to_owned(),
            start: "2024-01-01".to_owned(),
            end: "2024-01-01".to_owned(),
            reason: "vacation".to_owned(),
            time_off_type: "paid".to_owned(),
        }
    }

    fn sick_form() -> SubtractForm {
        SubtractForm {
            hours: "5".to_owned(),
            start: "2024-02-01".to_owned(),
            end: "2024-02-02".to_owned(),
            reason: "sick".to_owned(),
            time_off_type: "unpaid".to_owned(),
            ..vacation_form()
        }
    }

    #[tokio::test]
    async fn render_page() {
        let state = get_test_state(NegativeBalancePolicy::Allow);

        let response = get_subtract_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_attribute(&form, "action", endpoints::SUBTRACT);
        assert_form_input(&form, "type", "radio");
        assert_form_input(&form, "hours", "number");
        assert_form_input(&form, "start", "date");
        assert_form_input(&form, "end", "date");
        assert_form_input(&form, "reason", "text");
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn paid_time_off_moves_hours_from_left_to_used() {
        let state = get_test_state(NegativeBalancePolicy::Allow);
        let before = must_get_alice(&state);

        let response = subtract_hours_endpoint(State(state.clone()), Form(vacation_form()))
            .await
            .expect("Could not subtract hours");

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_eq!(must_get_alert_text(&html), "Employee hours updated");
        assert_eq!(
            get_alert_details(&html),
            "Transaction #1: subtracted 10 paid hours for Alice."
        );

        let after = must_get_alice(&state);
        assert_eq!(after.pto_left, before.pto_left - 10);
        assert_eq!(after.pto_used, before.pto_used + 10);
        assert_eq!(after.pto_earned, before.pto_earned);
        assert_eq!(after.uto_used, before.uto_used);

        let history = get_all_history(&state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].time_off_type, TimeOffType::Paid);
        assert_eq!(history[0].method, Method::Subtracted);
        assert_eq!(history[0].start_date, Some(date!(2024 - 01 - 01)));
        assert_eq!(history[0].end_date, Some(date!(2024 - 01 - 01)));
        assert_eq!(history[0].reason, "vacation");
    }

    #[tokio::test]
    async fn unpaid_time_off_only_changes_uto() {
        let state = get_test_state(NegativeBalancePolicy::Allow);
        let before = must_get_alice(&state);

        subtract_hours_endpoint(State(state.clone()), Form(sick_form()))
            .await
            .expect("Could not subtract hours");

        let after = must_get_alice(&state);
        assert_eq!(after.uto_used, before.uto_used + 5);
        assert_eq!(after.pto_left, before.pto_left);
        assert_eq!(after.pto_used, before.pto_used);
        assert_eq!(after.pto_earned, before.pto_earned);

        let history = get_all_history(&state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].time_off_type, TimeOffType::Unpaid);
        assert_eq!(history[0].end_date, Some(date!(2024 - 02 - 02)));
    }

    #[tokio::test]
    async fn blank_field_fails_without_changes() {
        let state = get_test_state(NegativeBalancePolicy::Allow);
        let before = must_get_alice(&state);
        let cases = [
            SubtractForm {
                employee: String::new(),
                ..vacation_form()
            },
            SubtractForm {
                hours: String::new(),
                ..vacation_form()
            },
            SubtractForm {
                start: String::new(),
                ..vacation_form()
            },
            SubtractForm {
                end: String::new(),
                ..vacation_form()
            },
            SubtractForm {
                reason: String::new(),
                ..vacation_form()
            },
            SubtractForm {
                time_off_type: String::new(),
                ..vacation_form()
            },
        ];

        for form in cases {
            let result = subtract_hours_endpoint(State(state.clone()), Form(form)).await;

            assert_eq!(result.unwrap_err(), Error::MissingSubtractInformation);
        }

        assert_eq!(must_get_alice(&state), before);
        assert_eq!(
            get_all_history(&state.db_connection.lock().unwrap()),
            Ok(vec![])
        );
    }

    #[tokio::test]
    async fn rejects_invalid_values() {
        let state = get_test_state(NegativeBalancePolicy::Allow);
        let cases = [
            (
                SubtractForm {
                    hours: "ten".to_owned(),
                    ..vacation_form()
                },
                Error::InvalidHours("ten".to_owned()),
            ),
            (
                SubtractForm {
                    time_off_type: "sick".to_owned(),
                    ..vacation_form()
                },
                Error::InvalidTimeOffType("sick".to_owned()),
            ),
            (
                SubtractForm {
                    start: "01/01/2024".to_owned(),
                    ..vacation_form()
                },
                Error::InvalidDateRange,
            ),
            (
                SubtractForm {
                    start: "2024-01-02".to_owned(),
                    end: "2024-01-01".to_owned(),
                    ..vacation_form()
                },
                Error::InvalidDateRange,
            ),
        ];

        for (form, want_error) in cases {
            let result = subtract_hours_endpoint(State(state.clone()), Form(form)).await;

            assert_eq!(result.unwrap_err(), want_error);
        }

        assert_eq!(must_get_alice(&state).pto_left, 40);
    }

    #[tokio::test]
    async fn allow_policy_lets_pto_go_negative() {
        let state = get_test_state(NegativeBalancePolicy::Allow);

        subtract_hours_endpoint(
            State(state.clone()),
            Form(SubtractForm {
                hours: "50".to_owned(),
                ..vacation_form()
            }),
        )
        .await
        .expect("Could not subtract hours");

        assert_eq!(must_get_alice(&state).pto_left, -10);
    }

    #[tokio::test]
    async fn reject_policy_refuses_overdraw_without_changes() {
        let state = get_test_state(NegativeBalancePolicy::Reject);
        let before = must_get_alice(&state);

        let result = subtract_hours_endpoint(
            State(state.clone()),
            Form(SubtractForm {
                hours: "50".to_owned(),
                ..vacation_form()
            }),
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            Error::InsufficientPto {
                requested: 50,
                available: 40
            }
        );
        assert_eq!(must_get_alice(&state), before);
        assert_eq!(
            get_all_history(&state.db_connection.lock().unwrap()),
            Ok(vec![])
        );
    }

    #[tokio::test]
    async fn reject_policy_still_allows_unpaid_time_off() {
        let state = get_test_state(NegativeBalancePolicy::Reject);

        let result = subtract_hours_endpoint(
            State(state.clone()),
            Form(SubtractForm {
                hours: "500".to_owned(),
                ..sick_form()
            }),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(must_get_alice(&state).uto_used, 500);
    }

    #[tokio::test]
    async fn paid_hours_that_overflow_pto_used_fail_without_changes() {
        let state = get_test_state(NegativeBalancePolicy::Allow);
        subtract_hours_endpoint(
            State(state.clone()),
            Form(SubtractForm {
                hours: i64::MAX.to_string(),
                ..vacation_form()
            }),
        )
        .await
        .expect("Could not subtract hours");
        let before = must_get_alice(&state);

        let result = subtract_hours_endpoint(
            State(state.clone()),
            Form(SubtractForm {
                hours: "1".to_owned(),
                ..vacation_form()
            }),
        )
        .await;

        assert_eq!(result.unwrap_err(), Error::HoursOutOfRange(1));
        assert_eq!(must_get_alice(&state), before);
        assert_eq!(
            get_all_history(&state.db_connection.lock().unwrap())
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn unpaid_hours_that_overflow_uto_used_fail_without_changes() {
        let state = get_test_state(NegativeBalancePolicy::Allow);
        subtract_hours_endpoint(
            State(state.clone()),
            Form(SubtractForm {
                hours: i64::MAX.to_string(),
                ..sick_form()
            }),
        )
        .await
        .expect("Could not subtract hours");
        let before = must_get_alice(&state);

        let result = subtract_hours_endpoint(State(state.clone()), Form(sick_form())).await;

        assert_eq!(result.unwrap_err(), Error::HoursOutOfRange(5));
        assert_eq!(must_get_alice(&state), before);
        assert_eq!(before.uto_used, i64::MAX);
    }
}
