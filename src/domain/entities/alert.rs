use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TemperatureUnit;

/// A confirmed sustained threshold breach for one location.
///
/// Produced once the consecutive-breach count reaches the configured
/// requirement, and re-produced every cycle while the location keeps
/// breaching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdAlert {
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub temperature: f64,
    pub threshold: f64,
    pub required_breaches: u32,
    pub unit: TemperatureUnit,
}

impl ThresholdAlert {
    /// Human-readable alert text naming the location, threshold, required
    /// consecutive-breach count, and current temperature with unit.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Temperature Alert: {} has exceeded {}{} for {} consecutive readings. \
             Current temperature: {:.1}{}",
            self.location,
            self.threshold,
            self.unit.symbol(),
            self.required_breaches,
            self.temperature,
            self.unit.symbol(),
        )
    }
}
