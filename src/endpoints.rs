//! The app's route templates and URL builders.
//!
//! The constants are the templates registered with the axum router. The
//! functions build concrete URLs for links, form actions and redirects.

use crate::{item::ItemId, trip::TripId, version::AppVersion};

/// The landing page, which links to each page version.
pub const LANDING: &str = "/";
/// The trips listing page for one version.
pub const TRIPS_VIEW: &str = "/{version}";
/// The route to create a trip.
pub const CREATE_TRIP: &str = "/{version}/trips";
/// The day-by-day detail page for one trip.
pub const TRIP_DETAIL_VIEW: &str = "/{version}/trips/{trip_id}";
/// The route to overwrite a trip's name and day count.
pub const EDIT_TRIP: &str = "/{version}/trips/{trip_id}/edit";
/// The route to delete a trip and all of its items.
pub const DELETE_TRIP: &str = "/{version}/trips/{trip_id}/delete";
/// The route to add an itinerary item to a trip.
pub const CREATE_ITEM: &str = "/{version}/trips/{trip_id}/items";
/// The route to delete a single itinerary item.
pub const DELETE_ITEM: &str = "/{version}/trips/{trip_id}/items/{item_id}/delete";

/// The URL of the trips listing page for `version`.
pub fn trips_view(version: AppVersion) -> String {
    format!("/{version}")
}

/// The URL that trip creation forms post to.
pub fn create_trip(version: AppVersion) -> String {
    format!("/{version}/trips")
}

/// The URL of the detail page for the trip `trip_id`.
pub fn trip_detail_view(version: AppVersion, trip_id: TripId) -> String {
    format!("/{version}/trips/{trip_id}")
}

/// The URL that trip edit forms post to.
pub fn edit_trip(version: AppVersion, trip_id: TripId) -> String {
    format!("/{version}/trips/{trip_id}/edit")
}

/// The URL that trip delete forms post to.
pub fn delete_trip(version: AppVersion, trip_id: TripId) -> String {
    format!("/{version}/trips/{trip_id}/delete")
}

/// The URL that add-item forms post to.
pub fn create_item(version: AppVersion, trip_id: TripId) -> String {
    format!("/{version}/trips/{trip_id}/items")
}

/// The URL that item delete forms post to.
pub fn delete_item(version: AppVersion, trip_id: TripId, item_id: ItemId) -> String {
    format!("/{version}/trips/{trip_id}/items/{item_id}/delete")
}

// These tests are here so that we know the route templates and built URLs
// will be accepted by axum.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::{endpoints, version::AppVersion};

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok(), "invalid URI: {uri}");
    }

    #[test]
    fn route_templates_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::LANDING);
        assert_endpoint_is_valid_uri(endpoints::TRIPS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::CREATE_TRIP);
        assert_endpoint_is_valid_uri(endpoints::TRIP_DETAIL_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_TRIP);
        assert_endpoint_is_valid_uri(endpoints::DELETE_TRIP);
        assert_endpoint_is_valid_uri(endpoints::CREATE_ITEM);
        assert_endpoint_is_valid_uri(endpoints::DELETE_ITEM);
    }

    #[test]
    fn built_urls_fill_in_every_parameter() {
        let version = AppVersion::V2;

        assert_eq!(endpoints::trips_view(version), "/v2");
        assert_eq!(endpoints::create_trip(version), "/v2/trips");
        assert_eq!(endpoints::trip_detail_view(version, 7), "/v2/trips/7");
        assert_eq!(endpoints::edit_trip(version, 7), "/v2/trips/7/edit");
        assert_eq!(endpoints::delete_trip(version, 7), "/v2/trips/7/delete");
        assert_eq!(endpoints::create_item(version, 7), "/v2/trips/7/items");
        assert_eq!(
            endpoints::delete_item(version, 7, 21),
            "/v2/trips/7/items/21/delete"
        );
    }

    #[test]
    fn built_urls_are_valid_uris() {
        for version in AppVersion::ALL {
            assert_endpoint_is_valid_uri(&endpoints::trips_view(version));
            assert_endpoint_is_valid_uri(&endpoints::trip_detail_view(version, 1));
            assert_endpoint_is_valid_uri(&endpoints::delete_item(version, 1, 2));
        }
    }
}
