use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// One normalized weather reading for a location at a point in time.
///
/// Immutable once written: a row is appended per successful fetch and never
/// mutated. Temperatures are already converted to the configured unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub location: String,
    /// Observation time as reported by the provider, epoch seconds UTC.
    pub timestamp: i64,
    /// Primary weather condition category (e.g. "Clear", "Rain").
    pub condition: String,
    pub temperature: f64,
    pub feels_like: f64,
}

impl Observation {
    /// Observation time as a UTC datetime. An out-of-range timestamp
    /// falls back to the epoch.
    #[must_use]
    pub fn observed_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.timestamp, 0).unwrap_or_default()
    }

    /// Calendar day (UTC) this observation belongs to.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.observed_at().date_naive()
    }

    /// Whether this observation falls in the last five minutes of its
    /// calendar day (hour 23, minute >= 55), the window that triggers
    /// end-of-day aggregation.
    #[must_use]
    pub fn in_end_of_day_window(&self) -> bool {
        let at = self.observed_at();
        at.hour() == 23 && at.minute() >= 55
    }
}
