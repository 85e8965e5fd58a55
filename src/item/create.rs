//! Itinerary item creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    item::{
        DayNumber, ItemFormData, ItemTitle, NewDayItem, create_day_item,
        domain::{blank_to_none, parse_amount_or_zero},
    },
    trip::{TripId, get_trip},
    version::AppVersion,
};

/// The state needed for adding an item to a trip.
#[derive(Debug, Clone)]
pub struct CreateItemEndpointState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateItemEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle the add-item form submission.
///
/// The day number is checked against the owning trip's day count, so the trip
/// is fetched first and a missing trip is a 404 rather than a validation
/// error.
pub async fn create_item_endpoint(
    Path((version, trip_id)): Path<(String, TripId)>,
    State(state): State<CreateItemEndpointState>,
    Form(form): Form<ItemFormData>,
) -> Result<Response, Error> {
    let version = AppVersion::from_path_segment(&version)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let trip = get_trip(trip_id, &connection)?;

    let day_number = DayNumber::new(
        form.day_number.trim().parse().unwrap_or(0),
        trip.days,
    )?;
    let title = ItemTitle::new(&form.title)?;

    let new_item = NewDayItem {
        trip_id: trip.id,
        day_number,
        title,
        map_link: blank_to_none(&form.map_link),
        expense_name: blank_to_none(&form.expense_name),
        expense_amount: parse_amount_or_zero(&form.expense_amount),
    };

    create_day_item(new_item, &connection).inspect_err(|error| {
        tracing::error!("An unexpected error occurred while creating an item: {error}")
    })?;

    Ok(Redirect::to(&endpoints::trip_detail_view(version, trip_id)).into_response())
}

#[cfg(test)]
mod create_item_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Form,
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        endpoints,
        item::{ItemFormData, get_items_for_trip},
        test_utils::assert_redirect_to,
        trip::{Trip, TripDays, TripName, create_trip},
        version::AppVersion,
    };

    use super::{CreateItemEndpointState, create_item_endpoint};

    fn get_create_item_state() -> CreateItemEndpointState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");

        CreateItemEndpointState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn seed_trip(state: &CreateItemEndpointState) -> Trip {
        create_trip(
            TripName::new_unchecked("Tokyo"),
            TripDays::new_unchecked(3),
            &state.db_connection.lock().unwrap(),
        )
        .expect("Could not create test trip")
    }

    fn item_form(day_number: &str, title: &str) -> ItemFormData {
        ItemFormData {
            day_number: day_number.to_string(),
            title: title.to_string(),
            map_link: String::new(),
            expense_name: String::new(),
            expense_amount: String::new(),
        }
    }

    #[tokio::test]
    async fn can_create_item() {
        let state = get_create_item_state();
        let trip = seed_trip(&state);

        let mut form = item_form("2", "Museum");
        form.map_link = "https://maps.example/museum".to_string();
        form.expense_name = "Tickets".to_string();
        form.expense_amount = "20".to_string();

        let response = create_item_endpoint(
            Path(("v1".to_string(), trip.id)),
            State(state.clone()),
            Form(form),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_redirect_to(
            &response,
            &endpoints::trip_detail_view(AppVersion::V1, trip.id),
        );

        let items = get_items_for_trip(trip.id, &state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].day_number.as_i64(), 2);
        assert_eq!(items[0].title.as_ref(), "Museum");
        assert_eq!(items[0].map_link.as_deref(), Some("https://maps.example/museum"));
        assert_eq!(items[0].expense_name.as_deref(), Some("Tickets"));
        assert_eq!(items[0].expense_amount, 20.0);
    }

    #[tokio::test]
    async fn blank_optional_fields_are_stored_as_absent() {
        let state = get_create_item_state();
        let trip = seed_trip(&state);

        let mut form = item_form("1", "Walk");
        form.map_link = "   ".to_string();
        form.expense_name = "".to_string();
        form.expense_amount = "not a number".to_string();

        create_item_endpoint(
            Path(("v1".to_string(), trip.id)),
            State(state.clone()),
            Form(form),
        )
        .await
        .unwrap();

        let items = get_items_for_trip(trip.id, &state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(items[0].map_link, None);
        assert_eq!(items[0].expense_name, None);
        assert_eq!(items[0].expense_amount, 0.0);
    }

    #[tokio::test]
    async fn day_beyond_trip_length_is_rejected() {
        let state = get_create_item_state();
        let trip = seed_trip(&state);

        let result = create_item_endpoint(
            Path(("v1".to_string(), trip.id)),
            State(state.clone()),
            Form(item_form("5", "Too Far")),
        )
        .await;

        assert_eq!(
            result.err(),
            Some(Error::DayOutOfRange {
                day_number: 5,
                days: 3
            })
        );
        let items = get_items_for_trip(trip.id, &state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(items, vec![]);
    }

    #[tokio::test]
    async fn malformed_day_number_is_rejected() {
        let state = get_create_item_state();
        let trip = seed_trip(&state);

        let result = create_item_endpoint(
            Path(("v1".to_string(), trip.id)),
            State(state),
            Form(item_form("two", "Museum")),
        )
        .await;

        assert_eq!(
            result.err(),
            Some(Error::DayOutOfRange {
                day_number: 0,
                days: 3
            })
        );
    }

    #[tokio::test]
    async fn empty_title_is_rejected() {
        let state = get_create_item_state();
        let trip = seed_trip(&state);

        let result = create_item_endpoint(
            Path(("v1".to_string(), trip.id)),
            State(state.clone()),
            Form(item_form("1", "   ")),
        )
        .await;

        assert_eq!(result.err(), Some(Error::EmptyItemTitle));
        let items = get_items_for_trip(trip.id, &state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(items, vec![]);
    }

    #[tokio::test]
    async fn item_for_missing_trip_is_not_found() {
        let state = get_create_item_state();

        let result = create_item_endpoint(
            Path(("v1".to_string(), 999)),
            State(state),
            Form(item_form("1", "Museum")),
        )
        .await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }

    #[tokio::test]
    async fn create_item_rejects_unknown_version() {
        let state = get_create_item_state();
        let trip = seed_trip(&state);

        let result = create_item_endpoint(
            Path(("version2".to_string(), trip.id)),
            State(state),
            Form(item_form("1", "Museum")),
        )
        .await;

        assert_eq!(
            result.err(),
            Some(Error::UnknownVersion("version2".to_string()))
        );
    }
}
