use chrono::{NaiveDate, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::domain::entities::DailySummary;
use crate::domain::ports::store::SummaryStore;
use crate::domain::value_objects::TemperatureUnit;
use crate::presentation::cli::formatters::summary_fmt::{
    format_summary_table, print_section_header,
};

#[derive(Serialize)]
struct ReportOutput<'a> {
    location: &'a str,
    days: u32,
    since: NaiveDate,
    summaries: &'a [DailySummary],
}

/// Shows daily summaries for a location over the last `days` days.
///
/// # Errors
///
/// Returns an error if `days` is zero, the store query fails, or JSON
/// serialization fails.
pub fn run_report(
    summary_store: &dyn SummaryStore,
    location: &str,
    days: u32,
    unit: TemperatureUnit,
    json: bool,
) -> anyhow::Result<()> {
    if days == 0 {
        anyhow::bail!("Number of days must be greater than 0");
    }

    let today = Utc::now().date_naive();
    let since = today - chrono::Days::new(u64::from(days) - 1);

    let summaries = summary_store
        .summaries_since(location, since)
        .map_err(|e| anyhow::anyhow!("failed to read summaries: {e}"))?;

    if json {
        let output = ReportOutput {
            location,
            days,
            since,
            summaries: &summaries,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_section_header(&format!("Daily summaries for {location} (last {days}d)"));

    if summaries.is_empty() {
        println!("{}", "No summaries recorded in this period".dimmed());
        println!();
        return Ok(());
    }

    println!("{}", format_summary_table(&summaries, unit));
    println!();
    Ok(())
}
