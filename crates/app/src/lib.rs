//! Impress backend composition root
//!
//! Wires configuration, the document content extractor and the email
//! service together for the binaries and request handlers.

use std::sync::Arc;

use impress_collab::{AttachmentPattern, ContentError, DocumentTextExtractor};
use impress_common::{Config, Error, Result};
use impress_email::{EmailConfig, EmailReceipt, EmailService, EmailServiceFactory};
use uuid::Uuid;

/// Shared application services
#[derive(Clone)]
pub struct App {
    pub config: Config,
    pub extractor: DocumentTextExtractor,
    pub email: Arc<dyn EmailService>,
}

impl App {
    /// Create the application from environment configuration
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::from_env()?;
        let email_config = EmailConfig::from_env()?;
        Ok(Self::new(config, email_config)?)
    }

    /// Create the application from explicit configuration
    pub fn new(config: Config, email_config: EmailConfig) -> Result<Self> {
        let extractor = DocumentTextExtractor::new(attachment_pattern(&config)?)
            .with_root_name(config.document_store_root.clone());

        let email = EmailServiceFactory::create(email_config)
            .map_err(|e| Error::Configuration(e.to_string()))?;

        Ok(Self {
            config,
            extractor,
            email: Arc::from(email),
        })
    }

    /// Plain text of stored document content, for the search index
    pub fn index_text(&self, content: &str) -> Result<String> {
        self.extractor.extract_text(content).map_err(content_error)
    }

    /// Storage keys of the attachments referenced by stored document content
    ///
    /// References whose pattern captures no key are returned as matched.
    pub fn attachment_keys(&self, content: Option<&str>) -> Result<Vec<String>> {
        let pattern = self.extractor.pattern();
        let references = self
            .extractor
            .extract_attachments(content)
            .map_err(content_error)?;

        Ok(references
            .into_iter()
            .map(|reference| pattern.storage_key(&reference).unwrap_or(reference))
            .collect())
    }

    /// Invite `recipient_email` to a document; delivery failures are only logged
    pub async fn invite(
        &self,
        language: &str,
        recipient_email: &str,
        document_id: Uuid,
    ) -> Option<EmailReceipt> {
        impress_email::email_invitation(self.email.as_ref(), language, recipient_email, document_id)
            .await
    }
}

/// Attachment pattern for the configured media storage
pub fn attachment_pattern(config: &Config) -> Result<AttachmentPattern> {
    let pattern = match config.attachment_url_pattern.as_deref() {
        Some(pattern) => AttachmentPattern::new(pattern),
        None => AttachmentPattern::for_media_storage(&config.media_url, &config.attachments_folder),
    };
    pattern.map_err(|e| Error::Configuration(e.to_string()))
}

/// Stored content that cannot be decoded is corrupt, which is a server-side fault
fn content_error(e: ContentError) -> Error {
    tracing::error!(code = e.error_code(), "Failed to extract document content: {}", e);
    Error::Internal(e.to_string())
}
