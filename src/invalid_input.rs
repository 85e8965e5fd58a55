//! The rejected-input page shown when form validation fails.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::html::{PAGE_CONTAINER_STYLE, base};

/// Build a response for a request whose form input failed validation.
///
/// No mutation has been committed by the time this is called; validation runs
/// before any write.
pub fn render_invalid_input(status_code: StatusCode, message: &str) -> Response {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold" { "That input was not accepted" }

            p class="mt-2" { (message) }

            p class="mt-2 text-sm text-gray-500 dark:text-gray-400"
            {
                "Use your browser's back button to fix the form and try again."
            }
        }
    };

    (status_code, base("Invalid Input", &content)).into_response()
}
