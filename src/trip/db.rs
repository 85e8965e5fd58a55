//! Database operations for trips.

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    trip::{Trip, TripDays, TripId, TripName},
};

/// Create a trip and return it with its generated ID.
pub fn create_trip(name: TripName, days: TripDays, connection: &Connection) -> Result<Trip, Error> {
    let created_at = OffsetDateTime::now_utc();

    connection.execute(
        "INSERT INTO trip (name, days, created_at) VALUES (?1, ?2, ?3);",
        (name.as_ref(), days.as_i64(), &created_at),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Trip {
        id,
        name,
        days,
        created_at,
    })
}

/// Retrieve a single trip by ID.
pub fn get_trip(trip_id: TripId, connection: &Connection) -> Result<Trip, Error> {
    connection
        .prepare("SELECT id, name, days, created_at FROM trip WHERE id = :id;")?
        .query_row(&[(":id", &trip_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all trips, newest first, ties broken by ID descending.
pub fn get_all_trips(connection: &Connection) -> Result<Vec<Trip>, Error> {
    connection
        .prepare("SELECT id, name, days, created_at FROM trip ORDER BY created_at DESC, id DESC;")?
        .query_map([], map_row)?
        .map(|maybe_trip| maybe_trip.map_err(|error| error.into()))
        .collect()
}

/// Overwrite a trip's name and day count.
///
/// The new day count may be smaller than the highest day number already used
/// by the trip's items; such items are silently left outside the new range.
///
/// # Errors
/// Returns [Error::UpdateMissingTrip] if no trip has `trip_id`.
pub fn update_trip(
    trip_id: TripId,
    name: TripName,
    days: TripDays,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE trip SET name = ?1, days = ?2 WHERE id = ?3",
        (name.as_ref(), days.as_i64(), trip_id),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingTrip);
    }

    Ok(())
}

/// Delete a trip by ID, cascading to its day items.
///
/// # Errors
/// Returns [Error::DeleteMissingTrip] if no trip has `trip_id`.
pub fn delete_trip(trip_id: TripId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM trip WHERE id = ?1", [trip_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTrip);
    }

    Ok(())
}

/// Initialize the trip table.
pub fn create_trip_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS trip (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            days INTEGER NOT NULL,
            created_at TEXT NOT NULL
        );",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Trip, rusqlite::Error> {
    let id = row.get(0)?;

    let raw_name: String = row.get(1)?;
    let name = TripName::new_unchecked(&raw_name);

    let days = TripDays::new_unchecked(row.get(2)?);
    let created_at = row.get(3)?;

    Ok(Trip {
        id,
        name,
        days,
        created_at,
    })
}
