//! Log Email Service Implementation
//!
//! Writes outgoing mail to the application log instead of delivering it.
//! Intended for local development, where no mail transport is configured.

use chrono::Utc;
use uuid::Uuid;

use crate::{EmailConfig, EmailError, EmailMessage, EmailReceipt, EmailService, Locale};

/// Email service that logs messages rather than sending them
pub struct LogEmailService {
    config: EmailConfig,
}

impl LogEmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl EmailService for LogEmailService {
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        if message.to.is_empty() {
            return Err(EmailError::Validation("Recipient is required".to_string()));
        }

        let message_id = format!("log-{}", Uuid::new_v4());

        tracing::info!(
            message_id = %message_id,
            to = %message.to,
            from = %message.from,
            subject = %message.subject,
            has_html = message.body_html.is_some(),
            "Outgoing email"
        );
        tracing::debug!(message_id = %message_id, "Email body:\n{}", message.body_text);

        Ok(EmailReceipt {
            message_id,
            sent_at: Utc::now(),
            provider: "log".to_string(),
            metadata: message.metadata,
        })
    }

    fn default_from(&self) -> String {
        self.config.default_from.clone()
    }

    fn app_base_url(&self) -> &str {
        &self.config.app_base_url
    }

    fn site_name(&self) -> &str {
        &self.config.site_name
    }

    fn default_locale(&self) -> Locale {
        self.config.default_locale
    }
}
