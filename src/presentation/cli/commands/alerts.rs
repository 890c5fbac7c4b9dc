use colored::Colorize;
use serde::Serialize;

use crate::domain::entities::Observation;
use crate::domain::ports::store::ObservationStore;
use crate::domain::value_objects::TemperatureUnit;
use crate::presentation::cli::formatters::summary_fmt::print_section_header;

#[derive(Serialize)]
struct AlertsOutput<'a> {
    location: &'a str,
    threshold: f64,
    readings: &'a [Observation],
}

/// Shows the most recent above-threshold readings for a location,
/// newest first.
///
/// # Errors
///
/// Returns an error if the store query fails or JSON serialization fails.
pub fn run_alerts(
    observation_store: &dyn ObservationStore,
    location: &str,
    threshold: f64,
    limit: usize,
    unit: TemperatureUnit,
    json: bool,
) -> anyhow::Result<()> {
    let readings = observation_store
        .recent_above_threshold(location, threshold, limit)
        .map_err(|e| anyhow::anyhow!("failed to read observations: {e}"))?;

    if json {
        let output = AlertsOutput {
            location,
            threshold,
            readings: &readings,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let symbol = unit.symbol();
    print_section_header(&format!(
        "Readings above {threshold}{symbol} for {location}"
    ));

    if readings.is_empty() {
        println!("{}", "No above-threshold readings recorded".green());
        println!();
        return Ok(());
    }

    for reading in &readings {
        let time = reading.observed_at().format("%Y-%m-%d %H:%M UTC");
        println!(
            "  {}  {}  {}",
            time.to_string().dimmed(),
            format!("{:.1}{symbol}", reading.temperature).red().bold(),
            reading.condition
        );
    }
    println!();
    Ok(())
}
