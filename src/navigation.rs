//! The navigation bar shown at the top of every page.

use maud::{Markup, html};

use crate::endpoints;

/// The pages linked from the navigation bar, in display order.
const LINKS: [(&str, &str); 5] = [
    (endpoints::ROOT, "History"),
    (endpoints::TOTALS, "Totals"),
    (endpoints::EMPLOYEE, "New Employee"),
    (endpoints::ADD, "Add Hours"),
    (endpoints::SUBTRACT, "Subtract Hours"),
];

const CURRENT_LINK_STYLE: &str = "block py-2 px-3 rounded-sm text-white bg-blue-700
    lg:bg-transparent lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500";

const LINK_STYLE: &str = "block py-2 px-3 rounded-sm text-gray-900 hover:bg-gray-100
    lg:hover:bg-transparent lg:hover:text-blue-700 lg:p-0 dark:text-white
    dark:hover:bg-gray-700 lg:dark:hover:text-blue-500 lg:dark:hover:bg-transparent";

pub struct NavBar<'a> {
    active_endpoint: &'a str,
}

impl<'a> NavBar<'a> {
    /// Get the navigation bar.
    ///
    /// The link to `active_endpoint`, if there is one, is marked as the
    /// current page. Pass an empty string for pages that are not linked.
    pub fn new(active_endpoint: &'a str) -> Self {
        Self { active_endpoint }
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::ROOT)
                        class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "PTO Tracker"
                    }

                    ul class="font-medium flex flex-col p-4 mt-4 lg:p-0 lg:mt-0 lg:flex-row lg:space-x-8"
                    {
                        @for (url, title) in LINKS {
                            @let is_current = url == self.active_endpoint;

                            li
                            {
                                a
                                    href=(url)
                                    class=(if is_current { CURRENT_LINK_STYLE } else { LINK_STYLE })
                                    aria-current=[is_current.then_some("page")]
                                {
                                    (title)
                                }
                            }
                        }
                    }
                }
            }
        )
    }
}
