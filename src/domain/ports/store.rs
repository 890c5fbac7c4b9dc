use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::entities::{DailySummary, Observation};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage read failed: {0}")]
    ReadFailed(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// Append-only observation log plus the read queries derived views need.
pub trait ObservationStore: Send + Sync {
    /// Append one observation. The write is durable before this returns.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn append_observation(&self, observation: &Observation) -> Result<(), StoreError>;

    /// All observations for a location on one UTC calendar day, in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn observations_for(
        &self,
        location: &str,
        date: NaiveDate,
    ) -> Result<Vec<Observation>, StoreError>;

    /// Most recent observations above a temperature threshold, newest
    /// first, up to `limit`. Backs the alerts report.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn recent_above_threshold(
        &self,
        location: &str,
        threshold: f64,
        limit: usize,
    ) -> Result<Vec<Observation>, StoreError>;
}

/// Derived daily-summary table, keyed by (location, date).
pub trait SummaryStore: Send + Sync {
    /// Insert or atomically replace the summary for its (location, date).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn upsert_daily_summary(&self, summary: &DailySummary) -> Result<(), StoreError>;

    /// The summary for one (location, date), if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn summary_for(
        &self,
        location: &str,
        date: NaiveDate,
    ) -> Result<Option<DailySummary>, StoreError>;

    /// Summaries for a location from `since` onward, date ascending.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn summaries_since(
        &self,
        location: &str,
        since: NaiveDate,
    ) -> Result<Vec<DailySummary>, StoreError>;
}
