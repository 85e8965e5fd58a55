//! Trip editing endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    trip::{TripDays, TripFormData, TripId, TripName, update_trip},
    version::AppVersion,
};

/// The state needed for editing a trip.
#[derive(Debug, Clone)]
pub struct EditTripEndpointState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditTripEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle the edit-trip form submission.
///
/// The day count may shrink below the highest day that already has items;
/// those items stay in the database and keep counting towards the trip total.
pub async fn edit_trip_endpoint(
    Path((version, trip_id)): Path<(String, TripId)>,
    State(state): State<EditTripEndpointState>,
    Form(form): Form<TripFormData>,
) -> Result<Response, Error> {
    let version = AppVersion::from_path_segment(&version)?;

    let name = TripName::new(&form.name)?;
    let days = TripDays::from_form_input(&form.days)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    update_trip(trip_id, name, days, &connection).inspect_err(|error| {
        tracing::error!("An unexpected error occurred while updating a trip: {error}")
    })?;

    Ok(Redirect::to(&endpoints::trip_detail_view(version, trip_id)).into_response())
}
