//! Alert banners and the terminal success and error pages built from them.
//!
//! Every form submission ends on one of these two pages (or a totals page),
//! so they carry the navigation bar for getting back to the forms.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
};

/// An alert message with styling for its outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success { message: String, details: String },
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html! {
            div role="alert" class=(container_style)
            {
                span class="font-medium" { (message) }

                @if !details.is_empty() {
                    p class="mt-1" { (details) }
                }
            }
        }
    }
}

fn alert_page(title: &str, alert: Alert) -> Markup {
    let nav_bar = NavBar::new("").into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-md"
            {
                (alert.into_html())

                p { (link(endpoints::ROOT, "View all transactions")) }
            }
        }
    };

    base(title, &content)
}

/// Render the page telling the user their request could not be completed.
///
/// `details` is shown under the message when it is not empty.
pub fn error_page(message: &str, details: &str) -> Markup {
    alert_page(
        "Error",
        Alert::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        },
    )
}

/// Render the page telling the user their change was saved.
pub fn success_page(message: &str, details: &str) -> Markup {
    alert_page(
        "Success",
        Alert::Success {
            message: message.to_owned(),
            details: details.to_owned(),
        },
    )
}
