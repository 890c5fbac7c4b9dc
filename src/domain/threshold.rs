use std::collections::HashMap;

/// Result of feeding one reading into the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachOutcome {
    /// Consecutive-breach count after this reading.
    pub count: u32,
    /// Whether an alert is due for this reading. True on every reading
    /// once the count reaches the required threshold, not only on the
    /// first, so alerts keep firing while the location keeps breaching.
    pub alert_due: bool,
}

/// Per-location consecutive-breach state machine.
///
/// Two logical states per location: normal (count 0) and breaching
/// (count >= 1), with the count as quantitative sub-state. The count is
/// incremented on each reading strictly above the threshold and reset to
/// exactly 0 on any other reading. State is in-memory only and starts at 0
/// for every configured location.
#[derive(Debug)]
pub struct BreachTracker {
    threshold: f64,
    required_breaches: u32,
    counts: HashMap<String, u32>,
}

impl BreachTracker {
    #[must_use]
    pub fn new(threshold: f64, required_breaches: u32, locations: &[String]) -> Self {
        let counts = locations.iter().map(|l| (l.clone(), 0)).collect();
        Self {
            threshold,
            required_breaches,
            counts,
        }
    }

    /// Record one converted temperature reading for a location.
    pub fn record(&mut self, location: &str, temperature: f64) -> BreachOutcome {
        let count = self.counts.entry(location.to_string()).or_insert(0);
        if temperature > self.threshold {
            *count += 1;
        } else {
            *count = 0;
        }
        BreachOutcome {
            count: *count,
            alert_due: *count >= self.required_breaches,
        }
    }

    /// Current consecutive-breach count for a location (0 if unknown).
    #[must_use]
    pub fn count(&self, location: &str) -> u32 {
        self.counts.get(location).copied().unwrap_or(0)
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub const fn required_breaches(&self) -> u32 {
        self.required_breaches
    }
}
