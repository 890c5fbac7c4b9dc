use lettre::message::Message;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};

use crate::application::config::EmailConfig;
use crate::domain::entities::ThresholdAlert;
use crate::domain::ports::notifier::{AlertNotifier, DispatchError};

/// Sends alert emails over SMTP with STARTTLS.
///
/// When the email section of the config is incomplete the notifier
/// degrades to a no-op, so the terminal channel keeps working without
/// SMTP credentials.
pub struct EmailNotifier {
    config: EmailConfig,
}

impl EmailNotifier {
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, alert: &ThresholdAlert) -> Result<Message, DispatchError> {
        let from = self
            .config
            .sender_email
            .parse()
            .map_err(|e| DispatchError::ChannelUnavailable(format!("invalid sender: {e}")))?;
        let to = self
            .config
            .recipient_email
            .parse()
            .map_err(|e| DispatchError::ChannelUnavailable(format!("invalid recipient: {e}")))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(format!("Temperature Alert - {}", alert.location))
            .body(alert.message())
            .map_err(|e| DispatchError::SendFailed(e.to_string()))
    }
}

impl AlertNotifier for EmailNotifier {
    fn notify(&self, alert: &ThresholdAlert) -> Result<(), DispatchError> {
        if !self.config.is_complete() {
            tracing::warn!("Email configuration incomplete, skipping email alert");
            return Ok(());
        }

        let message = self.build_message(alert)?;

        let transport = SmtpTransport::starttls_relay(&self.config.smtp_server)
            .map_err(|e| DispatchError::ChannelUnavailable(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(
                self.config.sender_email.clone(),
                self.config.sender_password.clone(),
            ))
            .build();

        transport
            .send(&message)
            .map_err(|e| DispatchError::SendFailed(e.to_string()))?;

        tracing::info!("Alert email sent for {}", alert.location);
        Ok(())
    }
}
