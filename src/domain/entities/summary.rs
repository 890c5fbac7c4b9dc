use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily rollup for one (location, calendar day).
///
/// Derived, not authoritative: recomputable at any time from the
/// observations of that day. Upserts replace, keyed by (location, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub location: String,
    pub date: NaiveDate,
    /// Arithmetic mean, unrounded. Presentation layers round.
    pub avg_temperature: f64,
    pub max_temperature: f64,
    pub min_temperature: f64,
    /// Most frequent condition of the day, frequency ties broken by the
    /// fixed severity ranking.
    pub dominant_condition: String,
}
