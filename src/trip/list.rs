//! Trips listing page with an inline create-trip form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, base, page_header,
    },
    trip::{Trip, get_all_trips},
    version::AppVersion,
};

/// The state needed for the trips listing page.
#[derive(Debug, Clone)]
pub struct TripsPageState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TripsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the trips listing page for one version.
pub async fn get_trips_page(
    Path(version): Path<String>,
    State(state): State<TripsPageState>,
) -> Result<Response, Error> {
    let version = AppVersion::from_path_segment(&version)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let trips = get_all_trips(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve trips: {error}"))?;

    Ok(trips_view(version, &trips).into_response())
}

fn trips_view(version: AppVersion, trips: &[Trip]) -> Markup {
    let content = html! {
        (page_header(version))

        main class=(PAGE_CONTAINER_STYLE)
        {
            header class="flex justify-between flex-wrap items-end"
            {
                h1 class=(version.heading_style()) { "Trips" }
            }

            (new_trip_form_view(version))

            ul class="mt-6 space-y-3"
            {
                @for trip in trips {
                    li class=(version.card_style()) data-trip-id=(trip.id)
                    {
                        a href=(endpoints::trip_detail_view(version, trip.id)) class=(LINK_STYLE)
                        {
                            (trip.name)
                        }

                        p class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            (trip.days) " day trip, created " (trip.created_at.date())
                        }
                    }
                }

                @if trips.is_empty() {
                    li class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        "No trips planned yet. Create your first trip above."
                    }
                }
            }
        }
    };

    base("Trips", &content)
}

fn new_trip_form_view(version: AppVersion) -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::create_trip(version))
            class="mt-4 space-y-4"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Trip Name" }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Trip Name"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="days" class=(FORM_LABEL_STYLE) { "Days" }

                input
                    id="days"
                    type="number"
                    name="days"
                    min="1"
                    value="1"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create Trip" }
        }
    }
}
