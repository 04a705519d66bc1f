//! The URIs for the app's pages and form endpoints.
//!
//! Each form page posts back to the same path it is served from.

/// The page listing every time-off transaction.
pub const ROOT: &str = "/";
/// The page for viewing the time-off totals of a single employee.
pub const TOTALS: &str = "/totals";
/// The page for registering a new employee.
pub const EMPLOYEE: &str = "/employee";
/// The page for adding earned PTO hours to an employee.
pub const ADD: &str = "/add";
/// The page for subtracting used PTO or UTO hours from an employee.
pub const SUBTRACT: &str = "/subtract";
/// The route for static files.
pub const STATIC: &str = "/static";
