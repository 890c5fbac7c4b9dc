use colored::Colorize;

use crate::domain::entities::ThresholdAlert;
use crate::domain::ports::notifier::{AlertNotifier, DispatchError};

const SEPARATOR_WIDTH: usize = 70;

/// Prints alerts to the terminal with a colored banner.
pub struct TerminalNotifier;

impl TerminalNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertNotifier for TerminalNotifier {
    fn notify(&self, alert: &ThresholdAlert) -> Result<(), DispatchError> {
        let separator = "\u{2500}".repeat(SEPARATOR_WIDTH);
        let badge = " TEMPERATURE ALERT ".on_red().white().bold();

        println!("\n{}", separator.dimmed());
        println!("{} {}", badge, alert.location.bold());
        println!("{}", separator.dimmed());
        println!("{}", alert.message());
        println!(
            "{}",
            format!("at {}", alert.timestamp.format("%Y-%m-%d %H:%M:%S UTC")).dimmed()
        );
        println!("{}\n", separator.dimmed());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::TemperatureUnit;
    use chrono::Utc;

    fn disable_colors() {
        colored::control::set_override(false);
    }

    fn make_alert() -> ThresholdAlert {
        ThresholdAlert {
            timestamp: Utc::now(),
            location: "Delhi".to_string(),
            temperature: 36.5,
            threshold: 35.0,
            required_breaches: 2,
            unit: TemperatureUnit::Celsius,
        }
    }

    #[test]
    fn notify_succeeds() {
        disable_colors();
        let notifier = TerminalNotifier::new();
        assert!(notifier.notify(&make_alert()).is_ok());
    }

    #[test]
    fn notify_fahrenheit_alert_succeeds() {
        disable_colors();
        let notifier = TerminalNotifier::new();
        let alert = ThresholdAlert {
            unit: TemperatureUnit::Fahrenheit,
            temperature: 98.2,
            threshold: 95.0,
            ..make_alert()
        };
        assert!(notifier.notify(&alert).is_ok());
    }
}
