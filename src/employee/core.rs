use serde::{Deserialize, Serialize};

use crate::Error;

pub type EmployeeId = i64;

/// An employee and their running time-off counters, in hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// The id for the employee.
    pub id: EmployeeId,
    /// The employee's full name, unique across all employees.
    pub fullname: String,
    /// Whether the employee is eligible for PTO, e.g. "yes" or "no".
    pub eligible: String,
    /// The PTO granted when the employee was registered.
    pub start_pto: i64,
    /// The PTO granted so far, including `start_pto`.
    pub pto_earned: i64,
    /// The PTO taken so far.
    pub pto_used: i64,
    /// The PTO that can still be taken.
    pub pto_left: i64,
    /// The unpaid time off taken so far.
    pub uto_used: i64,
}

/// The raw form data for registering an employee.
///
/// Missing fields deserialize as empty strings so that they are reported with
/// the same message as blank fields.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeForm {
    pub fullname: String,
    pub eligible: String,
    pub start_pto: String,
}

/// A validated employee that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    /// The employee's full name.
    pub fullname: String,
    /// Whether the employee is eligible for PTO.
    pub eligible: String,
    /// The PTO granted on registration, in hours.
    pub start_pto: i64,
}

impl TryFrom<EmployeeForm> for NewEmployee {
    type Error = Error;

    /// Validate the registration form.
    ///
    /// # Errors
    /// Returns [Error::MissingEmployeeInformation] if any field is blank, or
    /// [Error::InvalidStartPto] if `start_pto` is not a whole number.
    fn try_from(form: EmployeeForm) -> Result<Self, Self::Error> {
        let fullname = form.fullname.trim();
        let eligible = form.eligible.trim();
        let start_pto = form.start_pto.trim();

        if fullname.is_empty() || eligible.is_empty() || start_pto.is_empty() {
            return Err(Error::MissingEmployeeInformation);
        }

        let start_pto = start_pto
            .parse()
            .map_err(|_| Error::InvalidStartPto(start_pto.to_owned()))?;

        Ok(Self {
            fullname: fullname.to_owned(),
            eligible: eligible.to_owned(),
            start_pto,
        })
    }
}
