//! The base HTML document shell and shared styling.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};

use crate::{endpoints, version::AppVersion};

/// Style for inline links.
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

/// Style for primary form buttons.
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 bg-blue-500
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

/// Style for destructive form buttons.
pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

/// Style for form field labels.
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

/// Style for text and number inputs.
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

/// Style for the main page container.
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-6 py-8 mx-auto lg:py-5 max-w-3xl text-gray-900 dark:text-white";

/// Render a full HTML document with the shared head and `content` as the
/// body.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Daytrip" }

                script src="https://cdn.tailwindcss.com" {}

                style
                {
                    r#"
                    body {
                        font-family: system-ui, sans-serif;
                        margin: 0;
                    }
                    "#
                }
            }

            body class="bg-gray-100 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// The top-of-page navigation bar for versioned pages.
pub fn page_header(version: AppVersion) -> Markup {
    html! {
        nav class="flex items-center gap-4 px-6 py-3 bg-white shadow dark:bg-gray-800"
        {
            a href=(endpoints::LANDING)
                class="font-bold text-gray-900 dark:text-white"
            {
                "Daytrip"
            }

            a href=(endpoints::trips_view(version)) class=(LINK_STYLE) { "Trips" }

            span class="ml-auto flex gap-2 text-sm"
            {
                @for other in AppVersion::ALL {
                    @if other == version {
                        span class="font-semibold text-gray-900 dark:text-white"
                        {
                            (other.as_path_segment())
                        }
                    } @else {
                        a href=(endpoints::trips_view(other)) class=(LINK_STYLE)
                        {
                            (other.as_path_segment())
                        }
                    }
                }
            }
        }
    }
}

/// Format an expense amount as a dollar string, e.g. `$1,234.50`.
pub fn format_amount(amount: f64) -> String {
    static AMOUNT_FMT: OnceLock<Formatter> = OnceLock::new();

    let formatter = AMOUNT_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    // Zero is hardcoded as "0", so we must specify the formatted string for zero.
    if amount == 0.0 {
        return "$0.00".to_owned();
    }

    let mut formatted_string = formatter.fmt_string(amount);

    // numfmt omits the last trailing zero, so we must add it ourselves.
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

#[cfg(test)]
mod format_amount_tests {
    use super::format_amount;

    #[test]
    fn formats_zero() {
        assert_eq!(format_amount(0.0), "$0.00");
    }

    #[test]
    fn formats_whole_numbers_with_two_decimals() {
        assert_eq!(format_amount(55.0), "$55.00");
    }

    #[test]
    fn keeps_trailing_zeros() {
        assert_eq!(format_amount(12.3), "$12.30");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(1234.5), "$1,234.50");
    }
}
