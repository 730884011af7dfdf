//! Mock Email Service Implementation
//!
//! Provides in-memory email capture for testing without external dependencies.
//! Captured invitations can be inspected to validate sharing workflows, and
//! the service can be switched into a failing mode to exercise error paths.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EmailConfig, EmailError, EmailMessage, EmailReceipt, EmailService, Locale};

/// Document links in invitation bodies, e.g. `/docs/{uuid}/`
static DOCUMENT_LINK_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"/docs/([0-9a-f-]{36})/").expect("document link regex is valid")
});

/// Email captured by the mock service
#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub message: EmailMessage,
    pub receipt: EmailReceipt,
    pub captured_at: DateTime<Utc>,
}

impl CapturedEmail {
    /// Extract the invited document ID from metadata or the document link
    pub fn extract_document_id(&self) -> Option<Uuid> {
        // First check metadata
        if let Some(document_id) = self.message.metadata.get("document_id") {
            if let Ok(uuid) = Uuid::parse_str(document_id) {
                return Some(uuid);
            }
        }

        let text = format!(
            "{} {}",
            self.message.body_text,
            self.message.body_html.as_deref().unwrap_or("")
        );

        DOCUMENT_LINK_REGEX
            .captures(&text)
            .and_then(|captures| captures.get(1))
            .and_then(|id| Uuid::parse_str(id.as_str()).ok())
    }

    /// Whether this email is a document invitation
    pub fn is_invitation(&self) -> bool {
        self.message
            .metadata
            .get("email_type")
            .map(|t| t == "document_invitation")
            .unwrap_or(false)
    }
}

/// Mock email service for testing
#[derive(Debug, Clone)]
pub struct MockEmailService {
    emails: Arc<Mutex<Vec<CapturedEmail>>>,
    email_by_recipient: Arc<Mutex<HashMap<String, Vec<CapturedEmail>>>>,
    enabled: bool,
    failure: Option<String>,
    default_from: String,
    app_base_url: String,
    site_name: String,
    default_locale: Locale,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self::from_config(&EmailConfig::default())
    }

    /// Create a mock email service using the addresses and links of `config`
    pub fn from_config(config: &EmailConfig) -> Self {
        Self {
            emails: Arc::new(Mutex::new(Vec::new())),
            email_by_recipient: Arc::new(Mutex::new(HashMap::new())),
            enabled: true,
            failure: None,
            default_from: config.default_from.clone(),
            app_base_url: config.app_base_url.clone(),
            site_name: config.site_name.clone(),
            default_locale: config.default_locale,
        }
    }

    /// Create a disabled mock email service (for testing)
    pub fn new_disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Create a mock email service whose every send fails with `reason`
    pub fn new_failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::new()
        }
    }

    /// Get all captured emails
    pub fn get_all_emails(&self) -> Vec<CapturedEmail> {
        self.emails.lock().expect("mock mailbox poisoned").clone()
    }

    /// Get emails sent to a specific recipient
    pub fn get_emails_for_recipient(&self, email: &str) -> Vec<CapturedEmail> {
        self.email_by_recipient
            .lock()
            .expect("mock mailbox poisoned")
            .get(email)
            .cloned()
            .unwrap_or_default()
    }

    /// Get the most recent invitation email for a recipient
    pub fn get_latest_invitation_email(&self, email: &str) -> Option<CapturedEmail> {
        self.get_emails_for_recipient(email)
            .into_iter()
            .filter(CapturedEmail::is_invitation)
            .max_by_key(|e| e.captured_at)
    }

    /// Check if an invitation to `document_id` was sent to a specific email address
    pub fn was_invited_to(&self, email: &str, document_id: Uuid) -> bool {
        self.get_emails_for_recipient(email)
            .iter()
            .filter(|e| e.is_invitation())
            .any(|e| e.extract_document_id() == Some(document_id))
    }

    /// Get count of emails sent
    pub fn email_count(&self) -> usize {
        self.emails.lock().expect("mock mailbox poisoned").len()
    }

    /// Clear all captured emails
    pub fn clear(&self) {
        self.emails.lock().expect("mock mailbox poisoned").clear();
        self.email_by_recipient
            .lock()
            .expect("mock mailbox poisoned")
            .clear();
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailService for MockEmailService {
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        if let Some(reason) = &self.failure {
            tracing::warn!("Mock email service failing send to: {}", message.to);
            return Err(EmailError::Delivery(reason.clone()));
        }

        if !self.enabled {
            tracing::warn!("Mock email service disabled, skipping send");
            return Ok(EmailReceipt {
                message_id: format!("disabled-{}", Uuid::new_v4()),
                sent_at: Utc::now(),
                provider: "mock-disabled".to_string(),
                metadata: message.metadata.clone(),
            });
        }

        tracing::info!("Mock email service capturing email to: {}", message.to);

        let receipt = EmailReceipt {
            message_id: format!("mock-{}", Uuid::new_v4()),
            sent_at: Utc::now(),
            provider: "mock".to_string(),
            metadata: message.metadata.clone(),
        };

        let captured = CapturedEmail {
            message: message.clone(),
            receipt: receipt.clone(),
            captured_at: Utc::now(),
        };

        self.emails
            .lock()
            .expect("mock mailbox poisoned")
            .push(captured.clone());

        self.email_by_recipient
            .lock()
            .expect("mock mailbox poisoned")
            .entry(message.to)
            .or_default()
            .push(captured);

        tracing::info!(
            "Email captured successfully, message ID: {}",
            receipt.message_id
        );

        Ok(receipt)
    }

    fn default_from(&self) -> String {
        self.default_from.clone()
    }

    fn app_base_url(&self) -> &str {
        &self.app_base_url
    }

    fn site_name(&self) -> &str {
        &self.site_name
    }

    fn default_locale(&self) -> Locale {
        self.default_locale
    }
}
