//! Database operations for itinerary items.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    item::{DayItem, DayNumber, ItemId, ItemTitle, NewDayItem},
    trip::TripId,
};

/// Insert an itinerary item and return it with its generated ID.
pub fn create_day_item(new_item: NewDayItem, connection: &Connection) -> Result<DayItem, Error> {
    connection.execute(
        "INSERT INTO day_item (trip_id, day_number, title, map_link, expense_name, expense_amount)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        (
            new_item.trip_id,
            new_item.day_number.as_i64(),
            new_item.title.as_ref(),
            &new_item.map_link,
            &new_item.expense_name,
            new_item.expense_amount,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(DayItem {
        id,
        trip_id: new_item.trip_id,
        day_number: new_item.day_number,
        title: new_item.title,
        map_link: new_item.map_link,
        expense_name: new_item.expense_name,
        expense_amount: new_item.expense_amount,
    })
}

/// Retrieve all of a trip's items ordered by day ascending, then
/// most-recently-added first within a day.
pub fn get_items_for_trip(trip_id: TripId, connection: &Connection) -> Result<Vec<DayItem>, Error> {
    connection
        .prepare(
            "SELECT id, trip_id, day_number, title, map_link, expense_name, expense_amount
            FROM day_item
            WHERE trip_id = :trip_id
            ORDER BY day_number ASC, id DESC;",
        )?
        .query_map(&[(":trip_id", &trip_id)], map_row)?
        .map(|maybe_item| maybe_item.map_err(|error| error.into()))
        .collect()
}

/// Sum the expense amounts across all of a trip's items.
///
/// Aggregated in SQL rather than from the per-day summaries so it covers
/// every item of the trip, including any whose day number has been orphaned
/// by a later trip edit.
pub fn get_trip_expense_total(trip_id: TripId, connection: &Connection) -> Result<f64, Error> {
    connection
        .prepare(
            "SELECT COALESCE(SUM(expense_amount), 0) FROM day_item WHERE trip_id = :trip_id;",
        )?
        .query_row(&[(":trip_id", &trip_id)], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Delete an itinerary item by ID.
///
/// # Errors
/// Returns [Error::DeleteMissingItem] if no item has `item_id`.
pub fn delete_day_item(item_id: ItemId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM day_item WHERE id = ?1", [item_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingItem);
    }

    Ok(())
}

/// Initialize the day item table.
pub fn create_day_item_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS day_item (
            id INTEGER PRIMARY KEY,
            trip_id INTEGER NOT NULL,
            day_number INTEGER NOT NULL,
            title TEXT NOT NULL,
            map_link TEXT,
            expense_name TEXT,
            expense_amount REAL NOT NULL DEFAULT 0,
            FOREIGN KEY (trip_id) REFERENCES trip(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_day_item_trip ON day_item(trip_id, day_number);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<DayItem, rusqlite::Error> {
    let id = row.get(0)?;
    let trip_id = row.get(1)?;
    let day_number = DayNumber::new_unchecked(row.get(2)?);

    let raw_title: String = row.get(3)?;
    let title = ItemTitle::new_unchecked(&raw_title);

    let map_link = row.get(4)?;
    let expense_name = row.get(5)?;
    let expense_amount = row.get(6)?;

    Ok(DayItem {
        id,
        trip_id,
        day_number,
        title,
        map_link,
        expense_name,
        expense_amount,
    })
}
