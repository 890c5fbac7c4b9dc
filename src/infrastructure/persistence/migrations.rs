use rusqlite::Connection;

/// Initialize the database schema, creating tables if they don't exist.
///
/// # Errors
/// Returns `rusqlite::Error` if any SQL statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS observations (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            location    TEXT    NOT NULL,
            timestamp   INTEGER NOT NULL,
            condition   TEXT    NOT NULL,
            temperature REAL    NOT NULL,
            feels_like  REAL    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS daily_summaries (
            location           TEXT NOT NULL,
            date               TEXT NOT NULL,
            avg_temperature    REAL NOT NULL,
            max_temperature    REAL NOT NULL,
            min_temperature    REAL NOT NULL,
            dominant_condition TEXT NOT NULL,
            PRIMARY KEY (location, date)
        );

        CREATE INDEX IF NOT EXISTS idx_observations_location_timestamp
            ON observations(location, timestamp);",
    )?;
    Ok(())
}
