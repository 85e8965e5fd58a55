//! Itinerary item deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    item::{ItemId, delete_day_item},
    trip::{TripId, get_trip},
    version::AppVersion,
};

/// The state needed for deleting an item.
#[derive(Debug, Clone)]
pub struct DeleteItemEndpointState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteItemEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle the delete-item form submission.
///
/// The owning trip is looked up first so a URL with a bogus trip ID is a 404
/// before any delete is attempted.
pub async fn delete_item_endpoint(
    Path((version, trip_id, item_id)): Path<(String, TripId, ItemId)>,
    State(state): State<DeleteItemEndpointState>,
) -> Result<Response, Error> {
    let version = AppVersion::from_path_segment(&version)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    get_trip(trip_id, &connection)?;

    delete_day_item(item_id, &connection).inspect_err(|error| {
        tracing::error!("An unexpected error occurred while deleting an item: {error}")
    })?;

    Ok(Redirect::to(&endpoints::trip_detail_view(version, trip_id)).into_response())
}
