use axum::{body::Body, http::header::CONTENT_TYPE, response::Response};

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, want: &str) {
    let got = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    assert_eq!(got, Some(want), "got unexpected content-type");
}
