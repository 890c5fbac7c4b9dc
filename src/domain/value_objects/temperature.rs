use serde::{Deserialize, Serialize};

/// Temperature unit used for storage, comparison, and display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a raw Kelvin reading from the provider into this unit.
    ///
    /// Pure function of (value, unit); everything downstream of the
    /// provider works in the configured unit.
    #[must_use]
    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            Self::Celsius => kelvin - 273.15,
            Self::Fahrenheit => (kelvin - 273.15) * 9.0 / 5.0 + 32.0,
        }
    }

    /// Degree symbol suffix for human-readable output.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Celsius => write!(f, "celsius"),
            Self::Fahrenheit => write!(f, "fahrenheit"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_to_celsius() {
        let c = TemperatureUnit::Celsius.from_kelvin(300.15);
        assert!((c - 27.0).abs() < 0.1);
    }

    #[test]
    fn kelvin_to_fahrenheit() {
        let f = TemperatureUnit::Fahrenheit.from_kelvin(300.15);
        assert!((f - 80.6).abs() < 0.1);
    }

    #[test]
    fn absolute_zero() {
        let c = TemperatureUnit::Celsius.from_kelvin(0.0);
        assert!((c + 273.15).abs() < f64::EPSILON);
    }

    #[test]
    fn freezing_point_in_both_units() {
        assert!(TemperatureUnit::Celsius.from_kelvin(273.15).abs() < 1e-9);
        assert!((TemperatureUnit::Fahrenheit.from_kelvin(273.15) - 32.0).abs() < 1e-9);
    }

    #[test]
    fn symbols() {
        assert_eq!(TemperatureUnit::Celsius.symbol(), "°C");
        assert_eq!(TemperatureUnit::Fahrenheit.symbol(), "°F");
    }

    #[test]
    fn serde_lowercase() {
        let unit: TemperatureUnit = serde_json::from_str("\"fahrenheit\"").expect("deserialize");
        assert_eq!(unit, TemperatureUnit::Fahrenheit);
        assert_eq!(
            serde_json::to_string(&TemperatureUnit::Celsius).expect("serialize"),
            "\"celsius\""
        );
    }

    #[test]
    fn default_is_celsius() {
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
    }
}
