//! Shared page layout, widgets and style classes for the maud views.

use maud::{DOCTYPE, Markup, html};

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 \
    mx-auto lg:py-0 max-w-md text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";
pub const FORM_RADIO_GROUP_STYLE: &str = "flex flex-row gap-2";
pub const FORM_RADIO_INPUT_STYLE: &str = "peer h-4 w-4 shrink-0 cursor-pointer \
    text-blue-600 border-gray-300 dark:border-gray-600";
pub const FORM_RADIO_LABEL_STYLE: &str = "flex flex-1 items-center gap-2 rounded border \
    border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 px-3 py-2 \
    text-sm font-medium text-gray-700 dark:text-white cursor-pointer";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - PTO Tracker" }
                link href="/static/main.css" rel="stylesheet";
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to History"
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// A drop-down for choosing an employee by their full name.
///
/// The first option is a disabled placeholder so that the browser will not
/// submit a name the user did not pick.
pub fn employee_select(employee_names: &[String]) -> Markup {
    html! {
        div
        {
            label for="employee" class=(FORM_LABEL_STYLE) { "Employee" }

            select id="employee" name="employee" required class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" disabled selected { "Select an employee" }

                @for name in employee_names {
                    option value=(name) { (name) }
                }
            }
        }
    }
}

/// A labelled form input with the `required` attribute set.
pub fn required_input(name: &str, label: &str, type_: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                id=(name)
                type=(type_)
                name=(name)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// A group of radio buttons where the first option is checked.
///
/// `options` is a list of (value, label) pairs.
pub fn radio_group(name: &str, legend: &str, options: &[(&str, &str)]) -> Markup {
    html! {
        fieldset
        {
            legend class=(FORM_LABEL_STYLE) { (legend) }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                @for (index, (value, text)) in options.iter().enumerate() {
                    label class=(FORM_RADIO_LABEL_STYLE)
                    {
                        input
                            type="radio"
                            name=(name)
                            value=(value)
                            required
                            checked[index == 0]
                            class=(FORM_RADIO_INPUT_STYLE);

                        (text)
                    }
                }
            }
        }
    }
}

/// A link with blue text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE) { (text) }
    )
}
