//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Default public URL prefix of media storage
pub const DEFAULT_MEDIA_URL: &str = "/media/";

/// Default folder holding document attachments under a document's media prefix
pub const DEFAULT_ATTACHMENTS_FOLDER: &str = "attachments";

/// Name of the XML root the editor stores document content under
pub const DEFAULT_DOCUMENT_STORE_ROOT: &str = "document-store";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Media storage
    pub media_url: String,
    pub attachments_folder: String,

    /// Overrides the attachment pattern derived from `media_url`
    pub attachment_url_pattern: Option<String>,

    /// Collaborative document root element
    pub document_store_root: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let media_url = env::var("MEDIA_URL").unwrap_or_else(|_| DEFAULT_MEDIA_URL.to_string());
        if !media_url.ends_with('/') {
            return Err(anyhow::anyhow!(
                "MEDIA_URL must end with a slash, got {:?}",
                media_url
            ));
        }

        let attachments_folder = env::var("ATTACHMENTS_FOLDER")
            .unwrap_or_else(|_| DEFAULT_ATTACHMENTS_FOLDER.to_string())
            .trim_matches('/')
            .to_string();
        if attachments_folder.is_empty() {
            return Err(anyhow::anyhow!("ATTACHMENTS_FOLDER must not be empty"));
        }

        let config = Self {
            media_url,
            attachments_folder,
            attachment_url_pattern: env::var("ATTACHMENT_URL_PATTERN")
                .ok()
                .filter(|pattern| !pattern.trim().is_empty()),
            document_store_root: env::var("DOCUMENT_STORE_ROOT")
                .unwrap_or_else(|_| DEFAULT_DOCUMENT_STORE_ROOT.to_string()),
        };

        tracing::debug!(
            media_url = %config.media_url,
            attachments_folder = %config.attachments_folder,
            custom_pattern = config.attachment_url_pattern.is_some(),
            "Configuration loaded"
        );

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            media_url: DEFAULT_MEDIA_URL.to_string(),
            attachments_folder: DEFAULT_ATTACHMENTS_FOLDER.to_string(),
            attachment_url_pattern: None,
            document_store_root: DEFAULT_DOCUMENT_STORE_ROOT.to_string(),
        }
    }
}
