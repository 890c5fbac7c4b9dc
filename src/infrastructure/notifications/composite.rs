use crate::domain::entities::ThresholdAlert;
use crate::domain::ports::notifier::{AlertNotifier, DispatchError};

/// Forwards alerts to multiple notifiers.
///
/// Calls each notifier in order, collecting errors.
/// Returns the first error encountered (if any), but always calls all notifiers.
pub struct CompositeNotifier {
    notifiers: Vec<Box<dyn AlertNotifier>>,
}

impl CompositeNotifier {
    #[must_use]
    pub fn new(notifiers: Vec<Box<dyn AlertNotifier>>) -> Self {
        Self { notifiers }
    }
}

impl Default for CompositeNotifier {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AlertNotifier for CompositeNotifier {
    fn notify(&self, alert: &ThresholdAlert) -> Result<(), DispatchError> {
        let mut first_error = None;
        for notifier in &self.notifiers {
            if let Err(e) = notifier.notify(alert) {
                tracing::warn!("Alert dispatch failed: {e}");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
