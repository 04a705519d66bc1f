//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    employee::{get_employee_page, register_employee_endpoint},
    endpoints,
    history::get_history_page,
    status_page::get_404_not_found,
    time_off::{add_hours_endpoint, get_add_page, get_subtract_page, subtract_hours_endpoint},
    totals::{get_employee_totals, get_totals_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_history_page))
        .route(
            endpoints::TOTALS,
            get(get_totals_page).post(get_employee_totals),
        )
        .route(
            endpoints::EMPLOYEE,
            get(get_employee_page).post(register_employee_endpoint),
        )
        .route(endpoints::ADD, get(get_add_page).post(add_hours_endpoint))
        .route(
            endpoints::SUBTRACT,
            get(get_subtract_page).post(subtract_hours_endpoint),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
