use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::domain::entities::{DailySummary, Observation};
use crate::domain::ports::store::{ObservationStore, StoreError, SummaryStore};

use super::migrations;

/// SQLite-backed persistent store for observations and daily summaries.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Create a new `SQLite` store at the given path.
    ///
    /// Expands `~`, creates parent directories, opens connection,
    /// sets WAL mode and pragmas, and initializes schema.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the database cannot be opened or initialized.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let expanded = shellexpand::tilde(path);
        let db_path = PathBuf::from(expanded.as_ref());

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }

        let conn =
            Connection::open(&db_path).map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        // Readings feed the breach detector; a reading acknowledged but lost
        // on power failure would skew consecutive-breach counts.
        conn.pragma_update(None, "synchronous", "FULL")
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        conn.pragma_update(None, "busy_timeout", 5000)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        migrations::initialize_schema(&conn).map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn parse_observation_row(row: &rusqlite::Row<'_>) -> Result<Observation, rusqlite::Error> {
    Ok(Observation {
        location: row.get(0)?,
        timestamp: row.get(1)?,
        condition: row.get(2)?,
        temperature: row.get(3)?,
        feels_like: row.get(4)?,
    })
}

fn parse_summary_row(row: &rusqlite::Row<'_>) -> Result<DailySummary, rusqlite::Error> {
    let date_str: String = row.get(1)?;
    let date = date_str.parse::<NaiveDate>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(DailySummary {
        location: row.get(0)?,
        date,
        avg_temperature: row.get(2)?,
        max_temperature: row.get(3)?,
        min_temperature: row.get(4)?,
        dominant_condition: row.get(5)?,
    })
}

impl ObservationStore for SqliteStore {
    fn append_observation(&self, observation: &Observation) -> Result<(), StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;

        conn.execute(
            "INSERT INTO observations (location, timestamp, condition, temperature, feels_like) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                observation.location,
                observation.timestamp,
                observation.condition,
                observation.temperature,
                observation.feels_like,
            ],
        )
        .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        drop(conn);
        Ok(())
    }

    fn observations_for(
        &self,
        location: &str,
        date: NaiveDate,
    ) -> Result<Vec<Observation>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;

        let mut stmt = conn
            .prepare(
                "SELECT location, timestamp, condition, temperature, feels_like \
                 FROM observations \
                 WHERE location = ?1 AND date(timestamp, 'unixepoch') = ?2 \
                 ORDER BY timestamp ASC",
            )
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let observations = stmt
            .query_map(params![location, date.to_string()], parse_observation_row)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        drop(stmt);
        drop(conn);
        Ok(observations)
    }

    fn recent_above_threshold(
        &self,
        location: &str,
        threshold: f64,
        limit: usize,
    ) -> Result<Vec<Observation>, StoreError> {
        let limit = i64::try_from(limit).map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;

        let mut stmt = conn
            .prepare(
                "SELECT location, timestamp, condition, temperature, feels_like \
                 FROM observations \
                 WHERE location = ?1 AND temperature > ?2 \
                 ORDER BY timestamp DESC LIMIT ?3",
            )
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let observations = stmt
            .query_map(params![location, threshold, limit], parse_observation_row)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        drop(stmt);
        drop(conn);
        Ok(observations)
    }
}

impl SummaryStore for SqliteStore {
    fn upsert_daily_summary(&self, summary: &DailySummary) -> Result<(), StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;

        conn.execute(
            "INSERT INTO daily_summaries \
             (location, date, avg_temperature, max_temperature, min_temperature, dominant_condition) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             ON CONFLICT(location, date) DO UPDATE SET \
                avg_temperature = excluded.avg_temperature, \
                max_temperature = excluded.max_temperature, \
                min_temperature = excluded.min_temperature, \
                dominant_condition = excluded.dominant_condition",
            params![
                summary.location,
                summary.date.to_string(),
                summary.avg_temperature,
                summary.max_temperature,
                summary.min_temperature,
                summary.dominant_condition,
            ],
        )
        .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        drop(conn);
        Ok(())
    }

    fn summary_for(
        &self,
        location: &str,
        date: NaiveDate,
    ) -> Result<Option<DailySummary>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;

        let result = conn.query_row(
            "SELECT location, date, avg_temperature, max_temperature, min_temperature, \
             dominant_condition \
             FROM daily_summaries WHERE location = ?1 AND date = ?2",
            params![location, date.to_string()],
            parse_summary_row,
        );

        drop(conn);

        match result {
            Ok(summary) => Ok(Some(summary)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::ReadFailed(e.to_string())),
        }
    }

    fn summaries_since(
        &self,
        location: &str,
        since: NaiveDate,
    ) -> Result<Vec<DailySummary>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;

        let mut stmt = conn
            .prepare(
                "SELECT location, date, avg_temperature, max_temperature, min_temperature, \
                 dominant_condition \
                 FROM daily_summaries \
                 WHERE location = ?1 AND date >= ?2 \
                 ORDER BY date ASC",
            )
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let summaries = stmt
            .query_map(params![location, since.to_string()], parse_summary_row)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        drop(stmt);
        drop(conn);
        Ok(summaries)
    }
}
