use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Get the trimmed message text of the first alert on the page.
#[track_caller]
pub(crate) fn must_get_alert_text(html: &Html) -> String {
    html.select(&Selector::parse("div[role=alert] span").unwrap())
        .next()
        .expect("No alert found")
        .text()
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Get the transaction IDs of the history table rows in display order.
#[track_caller]
pub(crate) fn get_transact_ids(html: &Html) -> Vec<i64> {
    html.select(&Selector::parse("tr[data-transact-id]").unwrap())
        .map(|row| {
            let id = row.value().attr("data-transact-id").unwrap_or_default();
            id.parse()
                .unwrap_or_else(|_| panic!("Could not parse transaction ID {id:?}"))
        })
        .collect()
}

/// Get the trimmed details text of the first alert, or an empty string if it
/// has none.
pub(crate) fn get_alert_details(html: &Html) -> String {
    html.select(&Selector::parse("div[role=alert] p").unwrap())
        .next()
        .map(|details| details.text().collect::<String>().trim().to_owned())
        .unwrap_or_default()
}
