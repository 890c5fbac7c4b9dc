use std::sync::Mutex;

use chrono::NaiveDate;

use crate::domain::entities::{DailySummary, Observation};
use crate::domain::ports::store::{ObservationStore, StoreError, SummaryStore};

/// In-memory store for testing purposes.
pub struct InMemoryStore {
    observations: Mutex<Vec<Observation>>,
    summaries: Mutex<Vec<DailySummary>>,
}

impl InMemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            observations: Mutex::new(Vec::new()),
            summaries: Mutex::new(Vec::new()),
        }
    }

    /// Total observations held, across all locations and days.
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.observations.lock().map(|o| o.len()).unwrap_or(0)
    }

    /// Total summary rows held.
    #[must_use]
    pub fn summary_count(&self) -> usize {
        self.summaries.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservationStore for InMemoryStore {
    fn append_observation(&self, observation: &Observation) -> Result<(), StoreError> {
        self.observations
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?
            .push(observation.clone());
        Ok(())
    }

    fn observations_for(
        &self,
        location: &str,
        date: NaiveDate,
    ) -> Result<Vec<Observation>, StoreError> {
        Ok(self
            .observations
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .iter()
            .filter(|o| o.location == location && o.date() == date)
            .cloned()
            .collect())
    }

    fn recent_above_threshold(
        &self,
        location: &str,
        threshold: f64,
        limit: usize,
    ) -> Result<Vec<Observation>, StoreError> {
        let mut matching: Vec<Observation> = self
            .observations
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .iter()
            .filter(|o| o.location == location && o.temperature > threshold)
            .cloned()
            .collect();
        matching.sort_by_key(|o| std::cmp::Reverse(o.timestamp));
        matching.truncate(limit);
        Ok(matching)
    }
}

impl SummaryStore for InMemoryStore {
    fn upsert_daily_summary(&self, summary: &DailySummary) -> Result<(), StoreError> {
        let mut summaries = self
            .summaries
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        if let Some(existing) = summaries
            .iter_mut()
            .find(|s| s.location == summary.location && s.date == summary.date)
        {
            *existing = summary.clone();
        } else {
            summaries.push(summary.clone());
        }
        Ok(())
    }

    fn summary_for(
        &self,
        location: &str,
        date: NaiveDate,
    ) -> Result<Option<DailySummary>, StoreError> {
        Ok(self
            .summaries
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .iter()
            .find(|s| s.location == location && s.date == date)
            .cloned())
    }

    fn summaries_since(
        &self,
        location: &str,
        since: NaiveDate,
    ) -> Result<Vec<DailySummary>, StoreError> {
        let mut summaries: Vec<DailySummary> = self
            .summaries
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .iter()
            .filter(|s| s.location == location && s.date >= since)
            .cloned()
            .collect();
        summaries.sort_by_key(|s| s.date);
        Ok(summaries)
    }
}
