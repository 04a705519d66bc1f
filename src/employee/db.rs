//! Database operations for employees.

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    Error,
    employee::{Employee, EmployeeId, NewEmployee},
};

/// Create the employee table.
///
/// `pto_left` and `pto_earned` have no default since they are set from
/// `start_pto` when the employee is inserted.
pub fn create_employee_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS employee (
            id INTEGER PRIMARY KEY,
            fullname TEXT NOT NULL UNIQUE,
            eligible TEXT NOT NULL,
            start_pto INTEGER NOT NULL,
            pto_earned INTEGER NOT NULL,
            pto_used INTEGER NOT NULL DEFAULT 0,
            pto_left INTEGER NOT NULL,
            uto_used INTEGER NOT NULL DEFAULT 0
        )",
        (),
    )?;

    Ok(())
}

/// Save a new employee whose PTO left and PTO earned start at `start_pto`.
///
/// # Errors
/// Returns [Error::DuplicateEmployee] if an employee with the same full name
/// already exists, or [Error::SqlError] for any other SQL error.
pub fn create_employee(employee: NewEmployee, connection: &Connection) -> Result<Employee, Error> {
    let existing_id: Option<EmployeeId> = connection
        .query_row(
            "SELECT id FROM employee WHERE fullname = ?1",
            [&employee.fullname],
            |row| row.get(0),
        )
        .optional()?;

    if existing_id.is_some() {
        return Err(Error::DuplicateEmployee(employee.fullname));
    }

    connection
        .execute(
            "INSERT INTO employee (fullname, eligible, start_pto, pto_earned, pto_left) \
            VALUES (?1, ?2, ?3, ?3, ?3)",
            params![employee.fullname, employee.eligible, employee.start_pto],
        )
        .map_err(|error| match Error::from(error) {
            Error::DuplicateEmployee(_) => Error::DuplicateEmployee(employee.fullname.clone()),
            error => error,
        })?;

    let id = connection.last_insert_rowid();

    Ok(Employee {
        id,
        fullname: employee.fullname,
        eligible: employee.eligible,
        start_pto: employee.start_pto,
        pto_earned: employee.start_pto,
        pto_used: 0,
        pto_left: employee.start_pto,
        uto_used: 0,
    })
}

/// Retrieve an employee by their exact (case-sensitive) full name.
///
/// # Errors
/// Returns [Error::EmployeeNotFound] if no employee has the name `fullname`.
pub fn get_employee_by_name(fullname: &str, connection: &Connection) -> Result<Employee, Error> {
    connection
        .prepare(
            "SELECT id, fullname, eligible, start_pto, pto_earned, pto_used, pto_left, uto_used \
            FROM employee WHERE fullname = :fullname",
        )?
        .query_row(&[(":fullname", fullname)], map_row)
        .map_err(|error| match Error::from(error) {
            Error::NotFound => Error::EmployeeNotFound(fullname.to_owned()),
            error => error,
        })
}

/// Retrieve the full names of every employee ordered alphabetically.
pub fn get_employee_names(connection: &Connection) -> Result<Vec<String>, Error> {
    connection
        .prepare("SELECT fullname FROM employee ORDER BY fullname ASC")?
        .query_map([], |row| row.get::<_, String>(0))?
        .map(|maybe_name| maybe_name.map_err(|error| error.into()))
        .collect()
}

/// Add earned hours to an employee's PTO left and PTO earned.
pub fn add_earned_pto(id: EmployeeId, hours: i64, connection: &Connection) -> Result<(), Error> {
    update_counters(
        "UPDATE employee SET pto_left = pto_left + ?1, pto_earned = pto_earned + ?1 WHERE id = ?2",
        id,
        hours,
        connection,
    )
}

/// Move paid hours taken by an employee from PTO left to PTO used.
///
/// There is no floor on PTO left, callers decide whether an overdraw is allowed.
pub fn add_used_pto(id: EmployeeId, hours: i64, connection: &Connection) -> Result<(), Error> {
    update_counters(
        "UPDATE employee SET pto_left = pto_left - ?1, pto_used = pto_used + ?1 WHERE id = ?2",
        id,
        hours,
        connection,
    )
}

/// Add unpaid hours taken by an employee to UTO used.
pub fn add_used_uto(id: EmployeeId, hours: i64, connection: &Connection) -> Result<(), Error> {
    update_counters(
        "UPDATE employee SET uto_used = uto_used + ?1 WHERE id = ?2",
        id,
        hours,
        connection,
    )
}

fn update_counters(
    query: &str,
    id: EmployeeId,
    hours: i64,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(query, params![hours, id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

fn map_row(row: &Row) -> Result<Employee, rusqlite::Error> {
    Ok(Employee {
        id: row.get(0)?,
        fullname: row.get(1)?,
        eligible: row.get(2)?,
        start_pto: row.get(3)?,
        pto_earned: row.get(4)?,
        pto_used: row.get(5)?,
        pto_left: row.get(6)?,
        uto_used: row.get(7)?,
    })
}
