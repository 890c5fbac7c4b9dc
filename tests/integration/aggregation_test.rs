#![allow(clippy::expect_used)]

use chrono::NaiveDate;

use skywatch::domain::aggregation::summarize;
use skywatch::domain::entities::Observation;
use skywatch::domain::ports::store::{ObservationStore, SummaryStore};
use skywatch::infrastructure::persistence::sqlite_store::SqliteStore;

// 2023-10-31, 12:00:00 UTC.
const MIDDAY: i64 = 1_698_753_600;

fn make_store() -> (SqliteStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("skywatch.db");
    let store = SqliteStore::new(path.to_str().expect("path")).expect("store");
    (store, dir)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn observation(offset: i64, temperature: f64, condition: &str) -> Observation {
    Observation {
        location: "Chennai".to_string(),
        timestamp: MIDDAY + offset,
        condition: condition.to_string(),
        temperature,
        feels_like: temperature,
    }
}

#[test]
fn summarize_over_stored_day_matches_expected_rollup() {
    let (store, _dir) = make_store();
    let readings = [
        observation(0, 25.0, "Rain"),
        observation(300, 27.0, "Rain"),
        observation(600, 23.0, "Clear"),
        observation(900, 22.0, "Drizzle"),
    ];
    for reading in &readings {
        store.append_observation(reading).expect("append");
    }

    let day = date(2023, 10, 31);
    let stored = store.observations_for("Chennai", day).expect("read");
    let summary = summarize("Chennai", day, &stored).expect("summary");

    assert!((summary.avg_temperature - 24.25).abs() < 1e-9);
    assert!((summary.max_temperature - 27.0).abs() < f64::EPSILON);
    assert!((summary.min_temperature - 22.0).abs() < f64::EPSILON);
    assert_eq!(summary.dominant_condition, "Rain");
}

#[test]
fn summarize_is_deterministic_over_sqlite_reads() {
    let (store, _dir) = make_store();
    // Six-way frequency tie across all ranked conditions.
    for (i, condition) in ["Clear", "Clouds", "Drizzle", "Rain", "Snow", "Thunderstorm"]
        .iter()
        .enumerate()
    {
        store
            .append_observation(&observation(i64::try_from(i).expect("offset") * 60, 25.0, condition))
            .expect("append");
    }

    let day = date(2023, 10, 31);
    let first = {
        let stored = store.observations_for("Chennai", day).expect("read");
        summarize("Chennai", day, &stored).expect("summary")
    };
    for _ in 0..10 {
        let stored = store.observations_for("Chennai", day).expect("read");
        let again = summarize("Chennai", day, &stored).expect("summary");
        assert_eq!(again, first);
    }
    assert_eq!(first.dominant_condition, "Thunderstorm");
}

#[test]
fn summarize_then_upsert_round_trips_through_sqlite() {
    let (store, _dir) = make_store();
    store
        .append_observation(&observation(0, 30.5, "Clouds"))
        .expect("append");

    let day = date(2023, 10, 31);
    let stored = store.observations_for("Chennai", day).expect("read");
    let summary = summarize("Chennai", day, &stored).expect("summary");
    store.upsert_daily_summary(&summary).expect("upsert");

    let read = store
        .summary_for("Chennai", day)
        .expect("read")
        .expect("summary");
    assert_eq!(read, summary);
}

#[test]
fn observations_on_different_days_do_not_mix() {
    let (store, _dir) = make_store();
    store
        .append_observation(&observation(0, 40.0, "Clear"))
        .expect("append");
    // One day later.
    store
        .append_observation(&observation(86_400, 20.0, "Rain"))
        .expect("append");

    let first_day = date(2023, 10, 31);
    let stored = store.observations_for("Chennai", first_day).expect("read");
    let summary = summarize("Chennai", first_day, &stored).expect("summary");

    assert!((summary.avg_temperature - 40.0).abs() < f64::EPSILON);
    assert_eq!(summary.dominant_condition, "Clear");
}
