//! Employees and their time-off balances.

mod core;
mod db;
mod register;

pub use core::{Employee, EmployeeForm, EmployeeId, NewEmployee};
pub use db::{
    add_earned_pto, add_used_pto, add_used_uto, create_employee, create_employee_table,
    get_employee_by_name, get_employee_names,
};
pub use register::{get_employee_page, register_employee_endpoint};
