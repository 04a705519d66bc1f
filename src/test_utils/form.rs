use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_form_attribute(form: &ElementRef<'_>, attribute: &str, want: &str) {
    let got = form.value().attr(attribute);

    assert_eq!(
        got,
        Some(want),
        "want form with attribute {attribute}=\"{want}\", got {got:?}"
    );
}

/// Asserts every input named `name` has type `type_` and is required.
///
/// Radio groups share one name, so each of their inputs is checked.
#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();
    let inputs = form.select(&selector).collect::<Vec<_>>();

    assert!(!inputs.is_empty(), "No input found with name \"{name}\"");

    for input in inputs {
        let got_type = input.value().attr("type").unwrap_or_default();

        assert_eq!(
            got_type, type_,
            "want input {name} with type \"{type_}\", got {got_type:?}"
        );
        assert!(
            input.value().attr("required").is_some(),
            "want input {name} to have the required attribute"
        );
    }
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>) {
    let submit_buttons = form
        .select(&Selector::parse("button[type=submit]").unwrap())
        .count();

    assert_eq!(submit_buttons, 1, "want exactly one submit button");
}
