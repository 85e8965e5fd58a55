//! Trip creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    trip::{TripDays, TripFormData, TripName, create_trip},
    version::AppVersion,
};

/// The state needed for creating a trip.
#[derive(Debug, Clone)]
pub struct CreateTripEndpointState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTripEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle trip creation form submission.
///
/// A successful create redirects to the new trip's detail page so that a
/// browser refresh cannot resubmit the form.
pub async fn create_trip_endpoint(
    Path(version): Path<String>,
    State(state): State<CreateTripEndpointState>,
    Form(form): Form<TripFormData>,
) -> Result<Response, Error> {
    let version = AppVersion::from_path_segment(&version)?;

    // Validation happens before any write.
    let name = TripName::new(&form.name)?;
    let days = TripDays::from_form_input(&form.days)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let trip = create_trip(name, days, &connection).inspect_err(|error| {
        tracing::error!("An unexpected error occurred while creating a trip: {error}")
    })?;

    Ok(Redirect::to(&endpoints::trip_detail_view(version, trip.id)).into_response())
}
