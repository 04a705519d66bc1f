#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{
    assert_form_attribute, assert_form_input, assert_form_submit_button, must_get_form,
};
pub(crate) use html::{
    assert_valid_html, get_alert_details, get_transact_ids, must_get_alert_text,
    parse_html_document,
};
pub(crate) use http::assert_content_type;
