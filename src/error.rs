//! Defines the app level error type and conversions to rendered HTML pages.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::error_page, status_page::StatusPage};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The totals form was submitted without choosing an employee.
    #[error("No employee selected")]
    MissingEmployeeSelection,

    /// One or more of the fields for registering an employee was empty.
    #[error("Some employee information is missing")]
    MissingEmployeeInformation,

    /// One or more of the fields for adding hours was empty.
    #[error("Some information is missing")]
    MissingInformation,

    /// One or more of the fields for subtracting hours was empty.
    ///
    /// The lower-case message matches the wording the office staff are used to.
    #[error("some information is missing")]
    MissingSubtractInformation,

    /// An employee with the same full name already exists in the database.
    #[error("An employee with this name already exists")]
    DuplicateEmployee(String),

    /// The starting PTO for a new employee was not a whole number.
    #[error("Starting PTO must be a whole number of hours")]
    InvalidStartPto(String),

    /// The hours for an addition or subtraction was not a positive whole number.
    #[error("Hours must be a positive whole number")]
    InvalidHours(String),

    /// Recording the hours would push one of the employee's counters past
    /// the largest whole number the database can store.
    #[error("Recording {0} hours would put the employee's totals out of range")]
    HoursOutOfRange(i64),

    /// The start or end date could not be parsed, or the end date is before
    /// the start date.
    #[error("Invalid date range")]
    InvalidDateRange,

    /// The time off type was something other than "paid" or "unpaid".
    #[error("Time off type must be either paid or unpaid")]
    InvalidTimeOffType(String),

    /// No employee exists with the given full name.
    #[error("No employee named \"{0}\" exists")]
    EmployeeNotFound(String),

    /// A paid subtraction would leave the employee with negative PTO while
    /// negative balances are rejected.
    #[error("Not enough PTO left: requested {requested} hours but only {available} are available")]
    InsufficientPto {
        /// The number of hours the request tried to subtract.
        requested: i64,
        /// The employee's PTO left before the request.
        available: i64,
    },

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.ends_with("employee.fullname") =>
            {
                Error::DuplicateEmployee(String::new())
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    /// The status code to send with the error page.
    fn status_code(&self) -> StatusCode {
        match self {
            Error::EmployeeNotFound(_) | Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// What the user can do about the error, or an empty string if the
    /// message says it all.
    fn details(&self) -> String {
        match self {
            Error::DuplicateEmployee(fullname) => format!(
                "\"{fullname}\" is already registered. Use a name that tells the two employees apart."
            ),
            Error::EmployeeNotFound(_) => "Names must match exactly, including capital letters. \
                New employees can be added on the New Employee page."
                .to_owned(),
            Error::InsufficientPto {
                requested,
                available,
            } => format!(
                "{} more hours of PTO are needed. Record the time off as unpaid or add earned hours first.",
                requested.saturating_sub(*available)
            ),
            Error::HoursOutOfRange(_) => {
                "Check the number of hours entered, it is far larger than any real balance."
                    .to_owned()
            }
            _ => String::new(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => StatusPage::not_found().into_response(),
            Error::DatabaseLockError => StatusPage::internal_server_error().into_response(),
            Error::SqlError(ref error) => {
                tracing::error!("An unexpected error occurred: {}", error);
                StatusPage::internal_server_error().into_response()
            }
            error => (
                error.status_code(),
                error_page(&error.to_string(), &error.details()),
            )
                .into_response(),
        }
    }
}
