//! Database initialization for the application's two tables.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, item::create_day_item_table, trip::create_trip_table};

/// Create the application's tables if they do not exist and enable foreign
/// key enforcement for `connection`.
///
/// SQLite only honors `ON DELETE CASCADE` when the `foreign_keys` pragma is
/// on, and the pragma is per-connection state, so it is set here rather than
/// in the schema.
///
/// # Errors
/// Returns an error if the schema could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_trip_table(&transaction)?;
    create_day_item_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
