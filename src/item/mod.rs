//! Itinerary items: entries attached to one day of a trip, optionally
//! carrying an expense.

mod create;
mod db;
mod delete;
mod domain;

pub use create::create_item_endpoint;
pub use db::{
    create_day_item, create_day_item_table, delete_day_item, get_items_for_trip,
    get_trip_expense_total,
};
pub use delete::delete_item_endpoint;
pub use domain::{DayItem, DayNumber, ItemFormData, ItemId, ItemTitle, NewDayItem};
