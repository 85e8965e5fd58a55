//! Trips: the top-level planning entity with a name and a fixed number of
//! days.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod list;
mod view;

pub use create::create_trip_endpoint;
pub use db::{create_trip, create_trip_table, delete_trip, get_all_trips, get_trip, update_trip};
pub use delete::delete_trip_endpoint;
pub use domain::{Trip, TripDays, TripFormData, TripId, TripName};
pub use edit::edit_trip_endpoint;
pub use list::get_trips_page;
pub use view::get_trip_detail_page;
