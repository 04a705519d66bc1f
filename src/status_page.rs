//! Full-page views for requests that cannot be answered with a form result.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// A page showing the status code, what went wrong and what to do about it.
pub struct StatusPage<'a> {
    status: StatusCode,
    description: &'a str,
    fix: &'a str,
}

impl StatusPage<'static> {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Something's missing.",
            fix: "Sorry, we can't find that page.",
        }
    }

    pub fn internal_server_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl IntoResponse for StatusPage<'_> {
    fn into_response(self) -> Response {
        let title = self.status.canonical_reason().unwrap_or("Error");
        let markup = error_view(title, self.status.as_str(), self.description, self.fix);

        (self.status, markup).into_response()
    }
}

/// Fallback handler for routes that do not exist.
pub async fn get_404_not_found() -> Response {
    StatusPage::not_found().into_response()
}
