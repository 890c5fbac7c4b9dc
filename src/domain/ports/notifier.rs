use thiserror::Error;

use crate::domain::entities::ThresholdAlert;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("failed to send alert: {0}")]
    SendFailed(String),
    #[error("notification channel unavailable: {0}")]
    ChannelUnavailable(String),
}

/// Outbound alert channel. Delivery is best-effort: the caller logs a
/// `DispatchError` and keeps going, since a failing channel must never stop
/// the monitoring cycle.
pub trait AlertNotifier: Send + Sync {
    /// Dispatch one threshold alert.
    ///
    /// A channel whose configuration is incomplete treats dispatch as a
    /// no-op and returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError` if the send fails or the channel is
    /// unavailable.
    fn notify(&self, alert: &ThresholdAlert) -> Result<(), DispatchError>;
}
