use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use time::Date;

use crate::{Error, employee::EmployeeId};

pub type TransactId = i64;

/// Whether time off is paid (PTO) or unpaid (UTO).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOffType {
    Paid,
    Unpaid,
}

impl TimeOffType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOffType::Paid => "paid",
            TimeOffType::Unpaid => "unpaid",
        }
    }
}

impl FromStr for TimeOffType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(TimeOffType::Paid),
            "unpaid" => Ok(TimeOffType::Unpaid),
            other => Err(Error::InvalidTimeOffType(other.to_owned())),
        }
    }
}

/// Whether hours were added to or subtracted from an employee's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Added,
    Subtracted,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Added => "added",
            Method::Subtracted => "subtracted",
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "added" => Ok(Method::Added),
            "subtracted" => Ok(Method::Subtracted),
            other => Err(format!("unknown method \"{other}\"")),
        }
    }
}

macro_rules! impl_sql_text {
    ($type:ty) => {
        impl Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl ToSql for $type {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $type {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|error| FromSqlError::Other(format!("{error}").into()))
            }
        }
    };
}

impl_sql_text!(TimeOffType);
impl_sql_text!(Method);

/// A time-off transaction joined with the name of the employee it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub transact_id: TransactId,
    pub fullname: String,
    pub hours: i64,
    pub time_off_type: TimeOffType,
    pub method: Method,
    pub reason: String,
    /// Only set for subtractions.
    pub start_date: Option<Date>,
    /// Only set for subtractions.
    pub end_date: Option<Date>,
}

/// A time-off transaction that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryRecord {
    pub employee_id: EmployeeId,
    pub hours: i64,
    pub time_off_type: TimeOffType,
    pub method: Method,
    pub reason: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}
