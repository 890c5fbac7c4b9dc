use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::entities::{DailySummary, Observation};
use crate::domain::value_objects::condition_severity;

/// Compute the daily summary for one (location, day) from its observations.
///
/// Returns `None` when there are no observations, a valid empty state rather
/// than an error. Temperatures are averaged without rounding; rounding belongs
/// to the presentation layer.
#[must_use]
pub fn summarize(
    location: &str,
    date: NaiveDate,
    observations: &[Observation],
) -> Option<DailySummary> {
    if observations.is_empty() {
        return None;
    }

    let n = observations.len() as f64;
    let sum: f64 = observations.iter().map(|o| o.temperature).sum();
    let max = observations
        .iter()
        .map(|o| o.temperature)
        .fold(f64::NEG_INFINITY, f64::max);
    let min = observations
        .iter()
        .map(|o| o.temperature)
        .fold(f64::INFINITY, f64::min);

    let dominant = dominant_condition(observations.iter().map(|o| o.condition.as_str()));

    Some(DailySummary {
        location: location.to_string(),
        date,
        avg_temperature: sum / n,
        max_temperature: max,
        min_temperature: min,
        dominant_condition: dominant,
    })
}

/// Pick the dominant condition: strictly highest frequency wins; frequency
/// ties are broken by the fixed severity ranking, where a ranked condition
/// beats an unranked one even at equal severity, and ties among unranked
/// conditions resolve to the lexicographically smallest name. Handles ties
/// of any width.
fn dominant_condition<'a>(conditions: impl Iterator<Item = &'a str>) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for condition in conditions {
        *counts.entry(condition).or_insert(0) += 1;
    }

    let top = counts.values().copied().max().unwrap_or(0);
    let mut candidates: Vec<&str> = counts
        .iter()
        .filter(|(_, &count)| count == top)
        .map(|(&condition, _)| condition)
        .collect();

    // Severity descending, ranked before unranked, then name ascending.
    candidates.sort_by(|a, b| {
        let (sev_a, sev_b) = (condition_severity(a), condition_severity(b));
        let key_a = (sev_a.unwrap_or(0), sev_a.is_some());
        let key_b = (sev_b.unwrap_or(0), sev_b.is_some());
        key_b.cmp(&key_a).then_with(|| a.cmp(b))
    });

    candidates.first().map(|&c| c.to_string()).unwrap_or_default()
}
