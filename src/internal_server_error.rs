//! The 500 internal server error page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::html::{PAGE_CONTAINER_STYLE, base};

/// Build the 500 page response.
///
/// The underlying error is logged by the caller; nothing about it is shown to
/// the client.
pub fn render_internal_server_error() -> Response {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold" { "Sorry, something went wrong." }

            p class="mt-2" { "Try again later or check the server logs." }
        }
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        base("Server Error", &content),
    )
        .into_response()
}
