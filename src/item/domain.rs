//! Core itinerary item domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    trip::{TripDays, TripId},
};

/// Database identifier for an itinerary item.
pub type ItemId = i64;

/// A validated, non-empty item title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemTitle(String);

impl ItemTitle {
    /// Create an item title, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns [Error::EmptyItemTitle] if `title` is empty after trimming.
    pub fn new(title: &str) -> Result<Self, Error> {
        let title = title.trim();

        if title.is_empty() {
            Err(Error::EmptyItemTitle)
        } else {
            Ok(Self(title.to_string()))
        }
    }

    /// Create an item title without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(title: &str) -> Self {
        Self(title.to_string())
    }
}

impl AsRef<str> for ItemTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ItemTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day number validated against its trip's day count at creation time.
///
/// The bound is only checked when an item is created. Editing a trip to a
/// smaller day count can leave stored items whose day number exceeds the new
/// count, so values read back from the database are not revalidated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayNumber(i64);

impl DayNumber {
    /// Create a day number within `1..=days`.
    ///
    /// # Errors
    /// Returns [Error::DayOutOfRange] when the bound does not hold.
    pub fn new(day_number: i64, days: TripDays) -> Result<Self, Error> {
        if day_number < 1 || day_number > days.as_i64() {
            Err(Error::DayOutOfRange {
                day_number,
                days: days.as_i64(),
            })
        } else {
            Ok(Self(day_number))
        }
    }

    /// Create a day number without bounds checking, for mapping database
    /// rows.
    pub fn new_unchecked(day_number: i64) -> Self {
        Self(day_number)
    }

    /// The day number as a plain integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for DayNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An itinerary item attached to one day of a trip.
#[derive(Clone, Debug, PartialEq)]
pub struct DayItem {
    /// The item's database ID.
    pub id: ItemId,
    /// The owning trip.
    pub trip_id: TripId,
    /// Which day of the trip the item belongs to.
    pub day_number: DayNumber,
    /// What the item is, e.g. "Airport transfer".
    pub title: ItemTitle,
    /// An optional link to a map for the item's location.
    pub map_link: Option<String>,
    /// An optional label for the item's expense.
    pub expense_name: Option<String>,
    /// The item's cost; zero when the item is free.
    pub expense_amount: f64,
}

/// The fields needed to insert an itinerary item.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDayItem {
    /// The owning trip.
    pub trip_id: TripId,
    /// Which day of the trip the item belongs to.
    pub day_number: DayNumber,
    /// What the item is.
    pub title: ItemTitle,
    /// An optional link to a map for the item's location.
    pub map_link: Option<String>,
    /// An optional label for the item's expense.
    pub expense_name: Option<String>,
    /// The item's cost.
    pub expense_amount: f64,
}

impl NewDayItem {
    /// Convenience constructor that skips validation, mainly for wiring
    /// tests together. Endpoint code goes through [DayNumber::new] and
    /// [ItemTitle::new] instead.
    pub fn build(trip_id: TripId, day_number: i64, title: &str) -> Self {
        Self {
            trip_id,
            day_number: DayNumber::new_unchecked(day_number),
            title: ItemTitle::new_unchecked(title),
            map_link: None,
            expense_name: None,
            expense_amount: 0.0,
        }
    }

    /// Set the expense label and amount.
    pub fn expense(mut self, expense_name: Option<&str>, expense_amount: f64) -> Self {
        self.expense_name = expense_name.map(|name| name.to_string());
        self.expense_amount = expense_amount;
        self
    }

    /// Set the map link.
    pub fn map_link(mut self, map_link: &str) -> Self {
        self.map_link = Some(map_link.to_string());
        self
    }
}

/// Form data for adding an itinerary item.
///
/// Numeric fields stay strings so malformed input can default to zero
/// instead of failing form extraction; optional text fields default to the
/// empty string and are stored as NULL when blank.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemFormData {
    /// The day the item belongs to, parsed leniently.
    #[serde(default)]
    pub day_number: String,
    /// The item title field.
    pub title: String,
    /// The optional map link field.
    #[serde(default)]
    pub map_link: String,
    /// The optional expense label field.
    #[serde(default)]
    pub expense_name: String,
    /// The expense amount field, parsed leniently with a default of zero.
    #[serde(default)]
    pub expense_amount: String,
}

/// Turn a blank-after-trimming form field into `None`.
pub(crate) fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse an expense amount leniently, treating unparsable input as zero.
pub(crate) fn parse_amount_or_zero(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod item_title_tests {
    use crate::Error;

    use super::ItemTitle;

    #[test]
    fn new_fails_on_empty_string() {
        assert_eq!(ItemTitle::new(""), Err(Error::EmptyItemTitle));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        assert_eq!(ItemTitle::new(" \t "), Err(Error::EmptyItemTitle));
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        assert_eq!(ItemTitle::new(" Museum ").unwrap().as_ref(), "Museum");
    }
}
