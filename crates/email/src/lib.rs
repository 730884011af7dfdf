//! Impress Email Service
//!
//! Provides email functionality for document invitations with support for:
//! - Localized invitation content (English, French, German)
//! - Mock email service for testing and development
//! - Log email service writing outgoing mail to the application log
//! - Best-effort invitation delivery that never fails the caller

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

pub mod content;
pub mod i18n;
pub mod log;
pub mod mock;

pub use i18n::Locale;

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email configuration error: {0}")]
    Configuration(String),

    #[error("Email validation error: {0}")]
    Validation(String),

    #[error("Email delivery error: {0}")]
    Delivery(String),
}

/// Email message to be sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body_text: String,
    pub body_html: Option<String>,
    pub metadata: HashMap<String, String>,
}

impl EmailMessage {
    /// Create a new email message
    pub fn new(to: String, from: String, subject: String, body_text: String) -> Self {
        Self {
            to,
            from,
            reply_to: None,
            subject,
            body_text,
            body_html: None,
            metadata: HashMap::new(),
        }
    }

    /// Add HTML body content
    pub fn with_html(mut self, body_html: String) -> Self {
        self.body_html = Some(body_html);
        self
    }

    /// Add reply-to address
    pub fn with_reply_to(mut self, reply_to: String) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    /// Add metadata for tracking
    pub fn with_metadata(mut self, key: String, value: String) -> Self {
        self.metadata.insert(key, value);
        self
    }
}

/// Email delivery receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailReceipt {
    pub message_id: String,
    pub sent_at: DateTime<Utc>,
    pub provider: String,
    pub metadata: HashMap<String, String>,
}

/// Email service configuration
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Email service provider (mock, log)
    pub provider: String,
    /// Default from address
    pub default_from: String,
    /// Enable email sending (can disable for testing)
    pub enabled: bool,
    /// Base URL for the application (used in invitation links)
    pub app_base_url: String,
    /// Human-readable site name shown in invitations
    pub site_name: String,
    /// Locale used when the caller's language is unknown
    pub default_locale: Locale,
}

impl EmailConfig {
    /// Create email config from environment variables
    pub fn from_env() -> Result<Self, EmailError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string());

        let default_from =
            std::env::var("EMAIL_FROM").unwrap_or_else(|_| "from@example.com".to_string());
        if !default_from.validate_email() {
            return Err(EmailError::Configuration(format!(
                "EMAIL_FROM is not a valid address: {}",
                default_from
            )));
        }

        let enabled = std::env::var("EMAIL_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        let app_base_url =
            std::env::var("APP_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let site_name = std::env::var("SITE_NAME").unwrap_or_else(|_| "Docs".to_string());

        let default_locale = std::env::var("DEFAULT_LANGUAGE")
            .map(|tag| Locale::from_language(&tag))
            .unwrap_or_default();

        Ok(Self {
            provider,
            default_from,
            enabled,
            app_base_url,
            site_name,
            default_locale,
        })
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            default_from: "from@example.com".to_string(),
            enabled: true,
            app_base_url: "http://localhost:3000".to_string(),
            site_name: "Docs".to_string(),
            default_locale: Locale::default(),
        }
    }
}

/// Email service trait for different implementations
#[async_trait::async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email message
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError>;

    /// Return the default "from" address for outgoing emails
    fn default_from(&self) -> String;

    /// Return the application base URL for building links
    fn app_base_url(&self) -> &str;

    /// Return the site name shown in email content
    fn site_name(&self) -> &str;

    /// Return the locale used when the recipient's language is not supported
    fn default_locale(&self) -> Locale;

    /// Send a document invitation email in the recipient's language
    async fn send_document_invitation(
        &self,
        locale: Locale,
        recipient_email: &str,
        document_id: Uuid,
    ) -> Result<EmailReceipt, EmailError> {
        if !recipient_email.validate_email() {
            return Err(EmailError::Validation(format!(
                "Invalid recipient address: {}",
                recipient_email
            )));
        }

        let strings = locale.invitation();
        let document_url = content::document_url(self.app_base_url(), document_id);
        let body_text =
            content::document_invitation_text(strings, self.site_name(), &document_url);
        let body_html =
            content::document_invitation_html(strings, self.site_name(), &document_url);

        let message = EmailMessage::new(
            recipient_email.to_string(),
            self.default_from(),
            strings.subject.to_string(),
            body_text,
        )
        .with_html(body_html)
        .with_metadata("email_type".to_string(), "document_invitation".to_string())
        .with_metadata("document_id".to_string(), document_id.to_string())
        .with_metadata("locale".to_string(), locale.to_string());

        self.send_email(message).await
    }
}

/// Send a document invitation, logging and swallowing any failure
///
/// Invitation delivery is best-effort: the caller has already granted access
/// and must not fail because mail could not go out.
pub async fn email_invitation<S>(
    service: &S,
    language: &str,
    recipient_email: &str,
    document_id: Uuid,
) -> Option<EmailReceipt>
where
    S: EmailService + ?Sized,
{
    let locale = Locale::parse(language).unwrap_or_else(|| {
        let fallback = service.default_locale();
        tracing::debug!(
            language = language,
            fallback = %fallback,
            "Unsupported invitation language"
        );
        fallback
    });

    match service
        .send_document_invitation(locale, recipient_email, document_id)
        .await
    {
        Ok(receipt) => {
            tracing::info!(
                document_id = %document_id,
                message_id = %receipt.message_id,
                "Invitation sent to {}",
                recipient_email
            );
            Some(receipt)
        }
        Err(e) => {
            tracing::error!("invitation to {} was not sent: {}", recipient_email, e);
            None
        }
    }
}

/// Email service factory
pub struct EmailServiceFactory;

impl EmailServiceFactory {
    /// Create email service based on configuration
    pub fn create(config: EmailConfig) -> Result<Box<dyn EmailService>, EmailError> {
        if !config.enabled {
            tracing::info!("Email service disabled, using mock implementation");
            return Ok(Box::new(mock::MockEmailService::new_disabled()));
        }

        match config.provider.as_str() {
            "log" | "console" => {
                tracing::info!("Creating log email service");
                Ok(Box::new(log::LogEmailService::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock email service");
                Ok(Box::new(mock::MockEmailService::from_config(&config)))
            }
            provider => Err(EmailError::Configuration(format!(
                "Unknown email provider: {}. Supported providers: log, mock",
                provider
            ))),
        }
    }
}
