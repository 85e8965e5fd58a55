//! Ties the app's route templates to their handlers.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    item::{create_item_endpoint, delete_item_endpoint},
    landing::get_landing_page,
    not_found::get_404_not_found,
    trip::{
        create_trip_endpoint, delete_trip_endpoint, edit_trip_endpoint, get_trip_detail_page,
        get_trips_page,
    },
};

/// Create the router for the application with `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::LANDING, get(get_landing_page))
        .route(endpoints::TRIPS_VIEW, get(get_trips_page))
        .route(endpoints::CREATE_TRIP, post(create_trip_endpoint))
        .route(endpoints::TRIP_DETAIL_VIEW, get(get_trip_detail_page))
        .route(endpoints::EDIT_TRIP, post(edit_trip_endpoint))
        .route(endpoints::DELETE_TRIP, post(delete_trip_endpoint))
        .route(endpoints::CREATE_ITEM, post(create_item_endpoint))
        .route(endpoints::DELETE_ITEM, post(delete_item_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}
