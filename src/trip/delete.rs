//! Trip deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    trip::{TripId, delete_trip},
    version::AppVersion,
};

/// The state needed for deleting a trip.
#[derive(Debug, Clone)]
pub struct DeleteTripEndpointState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteTripEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle the delete-trip form submission.
///
/// The trip's items go with it via the foreign key cascade. Redirects back to
/// the trips listing.
pub async fn delete_trip_endpoint(
    Path((version, trip_id)): Path<(String, TripId)>,
    State(state): State<DeleteTripEndpointState>,
) -> Result<Response, Error> {
    let version = AppVersion::from_path_segment(&version)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    delete_trip(trip_id, &connection).inspect_err(|error| {
        tracing::error!("An unexpected error occurred while deleting a trip: {error}")
    })?;

    Ok(Redirect::to(&endpoints::trips_view(version)).into_response())
}
