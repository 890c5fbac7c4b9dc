#![allow(clippy::expect_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use skywatch::application::services::monitor::MonitorService;
use skywatch::domain::entities::{Observation, ThresholdAlert};
use skywatch::domain::ports::notifier::{AlertNotifier, DispatchError};
use skywatch::domain::ports::provider::{FetchError, WeatherProvider};
use skywatch::domain::ports::store::{ObservationStore, SummaryStore};
use skywatch::domain::value_objects::TemperatureUnit;
use skywatch::infrastructure::persistence::sqlite_store::SqliteStore;

// 2023-10-31, 12:00:00 UTC.
const MIDDAY: i64 = 1_698_753_600;
// 2023-10-31, 23:57:00 UTC, inside the end-of-day window.
const END_OF_DAY: i64 = 1_698_796_620;

// ---------------------------------------------------------------------------
// ScriptedProvider: pops one (timestamp, temperature, condition) per fetch
// ---------------------------------------------------------------------------

type Reading = (i64, f64, &'static str);

struct ScriptedProvider {
    script: Mutex<HashMap<String, VecDeque<Reading>>>,
}

impl ScriptedProvider {
    fn new(script: &[(&str, &[Reading])]) -> Self {
        let script = script
            .iter()
            .map(|(location, readings)| {
                ((*location).to_string(), readings.iter().copied().collect())
            })
            .collect();
        Self {
            script: Mutex::new(script),
        }
    }
}

#[async_trait]
impl WeatherProvider for ScriptedProvider {
    async fn fetch(&self, location: &str) -> Result<Observation, FetchError> {
        let (timestamp, temperature, condition) = self
            .script
            .lock()
            .expect("lock")
            .get_mut(location)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| FetchError::Transport("script exhausted".into()))?;
        Ok(Observation {
            location: location.to_string(),
            timestamp,
            condition: condition.to_string(),
            temperature,
            feels_like: temperature,
        })
    }
}

// ---------------------------------------------------------------------------
// TrackingNotifier
// ---------------------------------------------------------------------------

struct TrackingNotifier {
    alerts: Mutex<Vec<ThresholdAlert>>,
}

impl TrackingNotifier {
    const fn new() -> Self {
        Self {
            alerts: Mutex::new(vec![]),
        }
    }

    fn collected_alerts(&self) -> Vec<ThresholdAlert> {
        self.alerts.lock().expect("lock").clone()
    }
}

impl AlertNotifier for TrackingNotifier {
    fn notify(&self, alert: &ThresholdAlert) -> Result<(), DispatchError> {
        self.alerts.lock().expect("lock").push(alert.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_store() -> (SqliteStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("skywatch.db");
    let store = SqliteStore::new(path.to_str().expect("path")).expect("store");
    (store, dir)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn breach_confirmation_end_to_end() {
    let provider = ScriptedProvider::new(&[(
        "Delhi",
        &[
            (MIDDAY, 36.0, "Clear"),
            (MIDDAY + 300, 37.5, "Clear"),
            (MIDDAY + 600, 30.0, "Clouds"),
        ],
    )]);
    let (store, _dir) = make_store();
    let notifier = TrackingNotifier::new();
    let locations = vec!["Delhi".to_string()];

    let service = MonitorService::new(
        &provider,
        &store,
        &store,
        &notifier,
        &locations,
        TemperatureUnit::Celsius,
        35.0,
        2,
    );

    service.run_once().await;
    assert!(notifier.collected_alerts().is_empty());

    service.run_once().await;
    let alerts = notifier.collected_alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].location, "Delhi");
    assert!((alerts[0].temperature - 37.5).abs() < f64::EPSILON);
    assert!(alerts[0].message().contains("2 consecutive readings"));

    service.run_once().await;
    assert_eq!(notifier.collected_alerts().len(), 1);
    assert_eq!(service.breach_count("Delhi"), 0);

    // All three readings durably stored.
    let stored = store
        .observations_for("Delhi", date(2023, 10, 31))
        .expect("read");
    assert_eq!(stored.len(), 3);
}

#[tokio::test]
async fn fetch_failure_leaves_other_locations_monitored() {
    // Mumbai has no script entries, so every fetch for it fails.
    let provider = ScriptedProvider::new(&[
        ("Delhi", &[(MIDDAY, 40.0, "Clear"), (MIDDAY + 300, 41.0, "Clear")][..]),
        ("Mumbai", &[][..]),
    ]);
    let (store, _dir) = make_store();
    let notifier = TrackingNotifier::new();
    let locations = vec!["Delhi".to_string(), "Mumbai".to_string()];

    let service = MonitorService::new(
        &provider,
        &store,
        &store,
        &notifier,
        &locations,
        TemperatureUnit::Celsius,
        35.0,
        2,
    );

    let first = service.run_once().await;
    assert_eq!(first.fetch_failures, 1);
    assert_eq!(first.observations_stored, 1);

    let second = service.run_once().await;
    assert_eq!(second.alerts_fired, 1);

    let alerts = notifier.collected_alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].location, "Delhi");
}

#[tokio::test]
async fn end_of_day_cycle_writes_summary_to_sqlite() {
    let provider = ScriptedProvider::new(&[(
        "Delhi",
        &[
            (MIDDAY, 25.0, "Rain"),
            (MIDDAY + 300, 27.0, "Rain"),
            (MIDDAY + 600, 23.0, "Clear"),
            (END_OF_DAY, 22.0, "Clear"),
        ],
    )]);
    let (store, _dir) = make_store();
    let notifier = TrackingNotifier::new();
    let locations = vec!["Delhi".to_string()];

    let service = MonitorService::new(
        &provider,
        &store,
        &store,
        &notifier,
        &locations,
        TemperatureUnit::Celsius,
        35.0,
        2,
    );

    // Three midday cycles, no summary yet.
    service.run_once().await;
    service.run_once().await;
    service.run_once().await;
    assert!(store
        .summary_for("Delhi", date(2023, 10, 31))
        .expect("read")
        .is_none());

    // End-of-day cycle triggers the rollup over all four readings.
    let result = service.run_once().await;
    assert_eq!(result.summaries_written, 1);

    let summary = store
        .summary_for("Delhi", date(2023, 10, 31))
        .expect("read")
        .expect("summary");
    assert!((summary.avg_temperature - 24.25).abs() < 1e-9);
    assert!((summary.max_temperature - 27.0).abs() < f64::EPSILON);
    assert!((summary.min_temperature - 22.0).abs() < f64::EPSILON);
    // 2-2 frequency tie, Rain outranks Clear.
    assert_eq!(summary.dominant_condition, "Rain");
}

#[tokio::test]
async fn repeated_end_of_day_cycles_keep_one_summary_row() {
    let provider = ScriptedProvider::new(&[(
        "Delhi",
        &[(END_OF_DAY, 25.0, "Clear"), (END_OF_DAY + 60, 27.0, "Clear")],
    )]);
    let (store, _dir) = make_store();
    let notifier = TrackingNotifier::new();
    let locations = vec!["Delhi".to_string()];

    let service = MonitorService::new(
        &provider,
        &store,
        &store,
        &notifier,
        &locations,
        TemperatureUnit::Celsius,
        35.0,
        2,
    );

    service.run_once().await;
    service.run_once().await;

    let summaries = store
        .summaries_since("Delhi", date(2023, 10, 1))
        .expect("read");
    assert_eq!(summaries.len(), 1);
    // Second pass recomputed over both readings.
    assert!((summaries[0].avg_temperature - 26.0).abs() < 1e-9);
}
