use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TemperatureUnit;

/// Top-level application configuration loaded from TOML.
///
/// Immutable for the process lifetime once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// General settings: polling interval, temperature unit, locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
    #[serde(default)]
    pub unit: TemperatureUnit,
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
}

/// Weather provider credentials and endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Breach detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Temperature (in the configured unit) above which a reading breaches.
    #[serde(default = "default_temp_threshold")]
    pub temp_threshold: f64,
    /// Consecutive breaching readings required before an alert fires.
    #[serde(default = "default_consecutive_breaches")]
    pub consecutive_breaches: u32,
}

/// Email alert channel. Dispatch is skipped unless every field is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    #[serde(default)]
    pub sender_email: String,
    #[serde(default)]
    pub sender_password: String,
    #[serde(default)]
    pub recipient_email: String,
    #[serde(default = "default_smtp_server")]
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

/// Database storage path (tilde-expanded at point of use).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

// --- Defaults ---

const fn default_interval_minutes() -> u64 {
    5
}

fn default_locations() -> Vec<String> {
    vec![
        "Delhi".into(),
        "Mumbai".into(),
        "Chennai".into(),
        "Bangalore".into(),
        "Kolkata".into(),
        "Hyderabad".into(),
    ]
}

fn default_base_url() -> String {
    "http://api.openweathermap.org/data/2.5/weather".into()
}

const fn default_temp_threshold() -> f64 {
    35.0
}

const fn default_consecutive_breaches() -> u32 {
    2
}

fn default_smtp_server() -> String {
    "smtp.gmail.com".into()
}

const fn default_smtp_port() -> u16 {
    587
}

fn default_database_path() -> String {
    "~/.local/share/skywatch/skywatch.db".into()
}

// --- Default impls ---

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            interval_minutes: default_interval_minutes(),
            unit: TemperatureUnit::default(),
            locations: default_locations(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            temp_threshold: default_temp_threshold(),
            consecutive_breaches: default_consecutive_breaches(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            sender_email: String::new(),
            sender_password: String::new(),
            recipient_email: String::new(),
            smtp_server: default_smtp_server(),
            smtp_port: default_smtp_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl EmailConfig {
    /// Whether every channel field is set. Partial configuration means the
    /// channel is disabled, not an error.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.sender_email.is_empty()
            && !self.sender_password.is_empty()
            && !self.recipient_email.is_empty()
            && !self.smtp_server.is_empty()
            && self.smtp_port != 0
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from the default path or create a default config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// invalid, or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, serialization
    /// fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Check the constraints the monitoring engine depends on.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first violated constraint: zero polling
    /// interval, missing API key, empty or duplicate locations, or a zero
    /// consecutive-breach requirement.
    pub fn validate(&self) -> Result<()> {
        if self.general.interval_minutes == 0 {
            anyhow::bail!("interval_minutes must be greater than 0");
        }
        if self.provider.api_key.is_empty() {
            anyhow::bail!("provider.api_key is required");
        }
        if self.general.locations.is_empty() {
            anyhow::bail!("at least one location must be configured");
        }
        let mut seen = HashSet::new();
        for location in &self.general.locations {
            if location.trim().is_empty() {
                anyhow::bail!("location names must not be empty");
            }
            if !seen.insert(location.as_str()) {
                anyhow::bail!("duplicate location: {location}");
            }
        }
        if self.thresholds.consecutive_breaches == 0 {
            anyhow::bail!("consecutive_breaches must be at least 1");
        }
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("skywatch").join("config.toml"))
    }
}
