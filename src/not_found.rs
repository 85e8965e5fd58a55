//! The 404 not found page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
};

/// The fallback route handler for URLs that match nothing else.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Build the 404 page response.
pub fn get_404_not_found_response() -> Response {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold" { "Page not found" }

            p class="mt-2"
            {
                "The page you were looking for does not exist. "
                a href=(endpoints::LANDING) class=(LINK_STYLE) { "Back to the start" }
            }
        }
    };

    (StatusCode::NOT_FOUND, base("Not Found", &content)).into_response()
}
