use colored::Colorize;

use crate::domain::entities::DailySummary;
use crate::domain::value_objects::TemperatureUnit;

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}

/// Formats daily summaries as an aligned table, one row per day.
///
/// # Returns
///
/// A multi-line string with header, separator, and summary rows.
#[must_use]
pub fn format_summary_table(summaries: &[DailySummary], unit: TemperatureUnit) -> String {
    let symbol = unit.symbol();
    let header = format!(
        "{:<12} {:>9} {:>9} {:>9} {:<14}",
        "DATE",
        format!("AVG{symbol}"),
        format!("MAX{symbol}"),
        format!("MIN{symbol}"),
        "CONDITION"
    );
    let separator = "─".repeat(header.chars().count());

    let mut rows = vec![header, separator];

    for s in summaries {
        rows.push(format!(
            "{:<12} {:>9.1} {:>9.1} {:>9.1} {:<14}",
            s.date, s.avg_temperature, s.max_temperature, s.min_temperature, s.dominant_condition
        ));
    }

    rows.join("\n")
}
