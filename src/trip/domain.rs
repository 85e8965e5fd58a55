//! Core trip domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

/// Database identifier for a trip.
pub type TripId = i64;

/// A validated, non-empty trip name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripName(String);

impl TripName {
    /// Create a trip name, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns [Error::EmptyTripName] if `name` is empty after trimming.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyTripName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a trip name without validation.
    ///
    /// The caller should ensure that the string is not empty. This function
    /// has `_unchecked` in the name but is not `unsafe`, because violating
    /// the non-empty invariant causes incorrect behaviour but does not affect
    /// memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for TripName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TripName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated trip day count, always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TripDays(i64);

impl TripDays {
    /// Create a day count.
    ///
    /// # Errors
    /// Returns [Error::InvalidDayCount] if `days` is below one.
    pub fn new(days: i64) -> Result<Self, Error> {
        if days < 1 {
            Err(Error::InvalidDayCount)
        } else {
            Ok(Self(days))
        }
    }

    /// Create a day count without validation, for mapping database rows.
    pub fn new_unchecked(days: i64) -> Self {
        Self(days)
    }

    /// Parse a raw form field leniently: whitespace and unparsable input
    /// count as zero, which then fails the at-least-one check.
    ///
    /// # Errors
    /// Returns [Error::InvalidDayCount] if the parsed value is below one.
    pub fn from_form_input(value: &str) -> Result<Self, Error> {
        Self::new(value.trim().parse().unwrap_or(0))
    }

    /// The day count as a plain integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for TripDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A trip: a named plan covering a fixed number of days.
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    /// The trip's database ID.
    pub id: TripId,
    /// The trip's display name.
    pub name: TripName,
    /// How many days the trip covers.
    pub days: TripDays,
    /// When the trip was created; trips are listed newest first.
    pub created_at: OffsetDateTime,
}

/// Form data for trip creation and editing.
///
/// `days` stays a string so that malformed numbers can be treated as zero
/// instead of failing form extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TripFormData {
    /// The trip name field.
    pub name: String,
    /// The day count field, parsed leniently.
    #[serde(default)]
    pub days: String,
}
