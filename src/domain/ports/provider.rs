use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Observation;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("provider unreachable: {0}")]
    Transport(String),
    #[error("provider returned HTTP {0}")]
    BadStatus(u16),
    #[error("malformed provider payload: {0}")]
    MalformedPayload(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch one normalized observation for a location.
    ///
    /// Temperatures in the returned observation are already converted to
    /// the configured unit. A failed fetch is recoverable: the caller skips
    /// the location for this cycle and moves on.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport failure, non-2xx status, or a
    /// payload missing required fields.
    async fn fetch(&self, location: &str) -> Result<Observation, FetchError>;
}
