//! Daytrip is a web app for planning trips day by day and keeping an eye on
//! what each day costs.
//!
//! This library serves HTML pages directly from its route handlers. A trip is
//! a named plan with a fixed number of days; itinerary items are attached to
//! one day of a trip and optionally carry a map link and an expense.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod db;
mod endpoints;
mod html;
mod internal_server_error;
mod invalid_input;
mod item;
mod landing;
mod not_found;
mod routing;
mod summary;
#[cfg(test)]
mod test_utils;
mod trip;
mod version;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use routing::build_router;

use crate::{
    internal_server_error::render_internal_server_error, invalid_input::render_invalid_input,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create or rename a trip.
    #[error("Trip name cannot be empty")]
    EmptyTripName,

    /// A trip was given a day count below one.
    #[error("A trip must have at least one day")]
    InvalidDayCount,

    /// An empty string was used as an itinerary item title.
    #[error("Item title cannot be empty")]
    EmptyItemTitle,

    /// An itinerary item was assigned to a day outside its trip's range.
    #[error("Day {day_number} is outside the trip's 1 to {days} day range")]
    DayOutOfRange {
        /// The day number the client asked for.
        day_number: i64,
        /// The owning trip's day count.
        days: i64,
    },

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The version path segment did not name one of the recognized page
    /// versions.
    #[error("unrecognized version selector \"{0}\"")]
    UnknownVersion(String),

    /// Tried to update a trip that does not exist.
    #[error("tried to update a trip that is not in the database")]
    UpdateMissingTrip,

    /// Tried to delete a trip that does not exist.
    #[error("tried to delete a trip that is not in the database")]
    DeleteMissingTrip,

    /// Tried to delete an itinerary item that does not exist.
    #[error("tried to delete an itinerary item that is not in the database")]
    DeleteMissingItem,

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound
            | Error::UnknownVersion(_)
            | Error::UpdateMissingTrip
            | Error::DeleteMissingTrip
            | Error::DeleteMissingItem => get_404_not_found_response(),
            Error::EmptyTripName
            | Error::InvalidDayCount
            | Error::EmptyItemTitle
            | Error::DayOutOfRange { .. } => {
                let message = self.to_string();
                render_invalid_input(StatusCode::BAD_REQUEST, &message)
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error()
            }
        }
    }
}
