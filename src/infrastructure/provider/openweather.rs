use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::Observation;
use crate::domain::ports::provider::{FetchError, WeatherProvider};
use crate::domain::value_objects::TemperatureUnit;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// `OpenWeatherMap` current-weather client.
///
/// The API reports temperatures in Kelvin; readings are converted to the
/// configured unit before they leave this adapter.
pub struct OpenWeatherProvider {
    client: Client,
    base_url: String,
    api_key: String,
    unit: TemperatureUnit,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    weather: Vec<WeatherEntry>,
    main: MainEntry,
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct WeatherEntry {
    main: String,
}

#[derive(Debug, Deserialize)]
struct MainEntry {
    temp: f64,
    feels_like: f64,
}

impl OpenWeatherProvider {
    /// Build a provider over the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: &str, unit: TemperatureUnit) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            unit,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, location: &str) -> Result<Observation, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", location), ("appid", &self.api_key)])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let payload: ApiResponse = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

        let condition = payload
            .weather
            .first()
            .map(|w| w.main.clone())
            .ok_or_else(|| FetchError::MalformedPayload("empty weather array".into()))?;

        Ok(Observation {
            location: location.to_string(),
            timestamp: payload.dt,
            condition,
            temperature: self.unit.from_kelvin(payload.main.temp),
            feels_like: self.unit.from_kelvin(payload.main.feels_like),
        })
    }
}
