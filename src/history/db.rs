//! Database operations for the time-off history.

use rusqlite::{Connection, Row, params};

use crate::{
    Error,
    employee::EmployeeId,
    history::{HistoryRecord, NewHistoryRecord, TransactId},
};

/// Create the history table.
///
/// `AUTOINCREMENT` stops transaction IDs from being reused so they always
/// increase in the order the transactions were recorded.
pub fn create_history_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS history (
            transact_id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER NOT NULL,
            hours INTEGER NOT NULL,
            type TEXT NOT NULL CHECK(type IN ('paid', 'unpaid')),
            method TEXT NOT NULL CHECK(method IN ('added', 'subtracted')),
            reason TEXT NOT NULL,
            start_date TEXT,
            end_date TEXT,
            FOREIGN KEY(employee_id) REFERENCES employee(id) ON UPDATE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_history_employee_id ON history(employee_id);",
    )?;

    Ok(())
}

/// Append a transaction to the history and return its ID.
pub fn insert_history_record(
    record: &NewHistoryRecord,
    connection: &Connection,
) -> Result<TransactId, Error> {
    connection.execute(
        "INSERT INTO history (employee_id, hours, type, method, reason, start_date, end_date) \
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            record.employee_id,
            record.hours,
            record.time_off_type,
            record.method,
            record.reason,
            record.start_date,
            record.end_date,
        ],
    )?;

    Ok(connection.last_insert_rowid())
}

const SELECT_HISTORY: &str = "SELECT transact_id, fullname, hours, type, method, reason, \
    start_date, end_date FROM history \
    INNER JOIN employee ON history.employee_id = employee.id";

/// Retrieve every transaction, newest first.
pub fn get_all_history(connection: &Connection) -> Result<Vec<HistoryRecord>, Error> {
    connection
        .prepare(&format!("{SELECT_HISTORY} ORDER BY transact_id DESC"))?
        .query_map([], map_row)?
        .map(|maybe_record| maybe_record.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the transactions for one employee, newest first.
pub fn get_history_for_employee(
    employee_id: EmployeeId,
    connection: &Connection,
) -> Result<Vec<HistoryRecord>, Error> {
    connection
        .prepare(&format!(
            "{SELECT_HISTORY} WHERE history.employee_id = :employee_id ORDER BY transact_id DESC"
        ))?
        .query_map(&[(":employee_id", &employee_id)], map_row)?
        .map(|maybe_record| maybe_record.map_err(|error| error.into()))
        .collect()
}

fn map_row(row: &Row) -> Result<HistoryRecord, rusqlite::Error> {
    Ok(HistoryRecord {
        transact_id: row.get(0)?,
        fullname: row.get(1)?,
        hours: row.get(2)?,
        time_off_type: row.get(3)?,
        method: row.get(4)?,
        reason: row.get(5)?,
        start_date: row.get(6)?,
        end_date: row.get(7)?,
    })
}

#[cfg(test)]
mod history_query_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        employee::{Employee, NewEmployee, create_employee},
        history::{
            HistoryRecord, Method, NewHistoryRecord, TimeOffType, get_all_history,
            get_history_for_employee, insert_history_record,
        },
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
    }

    fn must_create_employee(fullname: &str, connection: &Connection) -> Employee {
        create_employee(
            NewEmployee {
                fullname: fullname.to_owned(),
                eligible: "yes".to_owned(),
                start_pto: 40,
            },
            connection,
        )
        .expect("Could not create test employee")
    }

    fn added(employee: &Employee, hours: i64, reason: &str) -> NewHistoryRecord {
        NewHistoryRecord {
            employee_id: employee.id,
            hours,
            time_off_type: TimeOffType::Paid,
            method: Method::Added,
            reason: reason.to_owned(),
            start_date: None,
            end_date: None,
        }
    }

    #[test]
    fn insert_and_get_round_trips_dates_and_enums() {
        let connection = get_test_connection();
        let alice = must_create_employee("Alice", &connection);
        let record = NewHistoryRecord {
            employee_id: alice.id,
            hours: 5,
            time_off_type: TimeOffType::Unpaid,
            method: Method::Subtracted,
            reason: "sick".to_owned(),
            start_date: Some(date!(2024 - 02 - 01)),
            end_date: Some(date!(2024 - 02 - 02)),
        };

        let transact_id = insert_history_record(&record, &connection).unwrap();

        assert_eq!(
            get_all_history(&connection),
            Ok(vec![HistoryRecord {
                transact_id,
                fullname: "Alice".to_owned(),
                hours: 5,
                time_off_type: TimeOffType::Unpaid,
                method: Method::Subtracted,
                reason: "sick".to_owned(),
                start_date: Some(date!(2024 - 02 - 01)),
                end_date: Some(date!(2024 - 02 - 02)),
            }])
        );
    }

    #[test]
    fn get_all_history_is_newest_first() {
        let connection = get_test_connection();
        let alice = must_create_employee("Alice", &connection);
        let bob = must_create_employee("Bob", &connection);

        insert_history_record(&added(&alice, 1, "first"), &connection).unwrap();
        insert_history_record(&added(&bob, 2, "second"), &connection).unwrap();
        insert_history_record(&added(&alice, 3, "third"), &connection).unwrap();

        let history = get_all_history(&connection).unwrap();

        let reasons = history
            .iter()
            .map(|record| record.reason.as_str())
            .collect::<Vec<_>>();
        assert_eq!(reasons, vec!["third", "second", "first"]);
        assert!(
            history
                .windows(2)
                .all(|pair| pair[0].transact_id > pair[1].transact_id)
        );
    }

    #[test]
    fn get_history_for_employee_filters_by_employee() {
        let connection = get_test_connection();
        let alice = must_create_employee("Alice", &connection);
        let bob = must_create_employee("Bob", &connection);

        insert_history_record(&added(&alice, 1, "first"), &connection).unwrap();
        insert_history_record(&added(&bob, 2, "second"), &connection).unwrap();
        insert_history_record(&added(&alice, 3, "third"), &connection).unwrap();

        let history = get_history_for_employee(alice.id, &connection).unwrap();

        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|record| record.fullname == "Alice"));
        assert_eq!(history[0].reason, "third");
        assert_eq!(history[1].reason, "first");
    }

    #[test]
    fn empty_history() {
        let connection = get_test_connection();

        assert_eq!(get_all_history(&connection), Ok(vec![]));
    }

    #[test]
    fn insert_for_missing_employee_fails() {
        let connection = get_test_connection();
        let record = NewHistoryRecord {
            employee_id: 42,
            hours: 8,
            time_off_type: TimeOffType::Paid,
            method: Method::Added,
            reason: "bonus".to_owned(),
            start_date: None,
            end_date: None,
        };

        let result = insert_history_record(&record, &connection);

        assert!(matches!(result, Err(Error::SqlError(_))));
        assert_eq!(get_all_history(&connection), Ok(vec![]));
    }
}
