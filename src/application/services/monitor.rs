use std::sync::Mutex;

use chrono::Utc;

use crate::domain::aggregation;
use crate::domain::entities::{Observation, ThresholdAlert};
use crate::domain::ports::notifier::AlertNotifier;
use crate::domain::ports::provider::WeatherProvider;
use crate::domain::ports::store::{ObservationStore, SummaryStore};
use crate::domain::threshold::BreachTracker;
use crate::domain::value_objects::TemperatureUnit;

/// Result of a single monitoring cycle.
#[derive(Debug, Default)]
pub struct CycleResult {
    pub observations_stored: usize,
    pub fetch_failures: usize,
    pub alerts_fired: usize,
    pub summaries_written: usize,
}

/// Orchestrates a monitoring cycle: fetch → persist → threshold-check →
/// (end of day) aggregate, for each configured location in order.
///
/// One location's failure never aborts its siblings; a failed fetch is a
/// skipped cycle for that location only, retried by the next cycle.
pub struct MonitorService<'a> {
    provider: &'a dyn WeatherProvider,
    observation_store: &'a dyn ObservationStore,
    summary_store: &'a dyn SummaryStore,
    notifier: &'a dyn AlertNotifier,
    locations: &'a [String],
    unit: TemperatureUnit,
    // Sole writer is the scheduler task; the mutex covers any concurrent
    // read of breach counts.
    tracker: Mutex<BreachTracker>,
}

impl<'a> MonitorService<'a> {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        provider: &'a dyn WeatherProvider,
        observation_store: &'a dyn ObservationStore,
        summary_store: &'a dyn SummaryStore,
        notifier: &'a dyn AlertNotifier,
        locations: &'a [String],
        unit: TemperatureUnit,
        temp_threshold: f64,
        consecutive_breaches: u32,
    ) -> Self {
        Self {
            provider,
            observation_store,
            summary_store,
            notifier,
            locations,
            unit,
            tracker: Mutex::new(BreachTracker::new(
                temp_threshold,
                consecutive_breaches,
                locations,
            )),
        }
    }

    /// Run a single monitoring cycle over all configured locations.
    pub async fn run_once(&self) -> CycleResult {
        let mut result = CycleResult::default();

        for location in self.locations {
            let observation = match self.provider.fetch(location).await {
                Ok(observation) => observation,
                Err(e) => {
                    tracing::warn!("Fetch failed for {location}: {e}");
                    result.fetch_failures += 1;
                    continue;
                }
            };

            match self.observation_store.append_observation(&observation) {
                Ok(()) => result.observations_stored += 1,
                Err(e) => {
                    // The reading is lost; the next cycle is the retry.
                    tracing::error!("Failed to store observation for {location}: {e}");
                }
            }

            // Append and threshold-check are independent effects: the
            // detector still sees the reading even if the write failed.
            if self.check_threshold(location, observation.temperature) {
                result.alerts_fired += 1;
            }

            if observation.in_end_of_day_window() && self.aggregate_day(&observation) {
                result.summaries_written += 1;
            }
        }

        result
    }

    /// Current consecutive-breach count for a location.
    #[must_use]
    pub fn breach_count(&self, location: &str) -> u32 {
        self.tracker
            .lock()
            .map(|tracker| tracker.count(location))
            .unwrap_or(0)
    }

    /// Feed one reading into the breach tracker and dispatch an alert when
    /// due. Returns whether an alert fired.
    fn check_threshold(&self, location: &str, temperature: f64) -> bool {
        let (outcome, threshold, required) = match self.tracker.lock() {
            Ok(mut tracker) => (
                tracker.record(location, temperature),
                tracker.threshold(),
                tracker.required_breaches(),
            ),
            Err(_) => {
                tracing::warn!("Breach tracker lock poisoned, skipping threshold check");
                return false;
            }
        };

        if !outcome.alert_due {
            return false;
        }

        let alert = ThresholdAlert {
            timestamp: Utc::now(),
            location: location.to_string(),
            temperature,
            threshold,
            required_breaches: required,
            unit: self.unit,
        };
        tracing::warn!("{}", alert.message());

        if let Err(e) = self.notifier.notify(&alert) {
            tracing::warn!("Alert dispatch failed for {location}: {e}");
        }
        true
    }

    /// Recompute and upsert the daily summary for the observation's day.
    /// Idempotent: rerunning within the end-of-day window overwrites the
    /// same (location, date) row. Returns whether a summary was written.
    fn aggregate_day(&self, observation: &Observation) -> bool {
        let date = observation.date();
        let observations = match self
            .observation_store
            .observations_for(&observation.location, date)
        {
            Ok(observations) => observations,
            Err(e) => {
                tracing::warn!(
                    "Failed to read observations for {} on {date}: {e}",
                    observation.location
                );
                return false;
            }
        };

        let Some(summary) = aggregation::summarize(&observation.location, date, &observations)
        else {
            tracing::debug!("No observations for {} on {date}", observation.location);
            return false;
        };

        match self.summary_store.upsert_daily_summary(&summary) {
            Ok(()) => {
                tracing::info!(
                    "Daily summary written for {} on {date}: avg {:.1}{}, dominant {}",
                    summary.location,
                    summary.avg_temperature,
                    self.unit.symbol(),
                    summary.dominant_condition
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    "Failed to upsert summary for {} on {date}: {e}",
                    observation.location
                );
                false
            }
        }
    }
}
