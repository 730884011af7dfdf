//! Attachment references
//!
//! Media uploaded into a document is referenced from its markup by URL. The
//! URL layout is deployment configuration, so the pattern is injected rather
//! than hard-coded here.

use regex::Regex;

use crate::error::PatternError;

/// Lowercase hyphenated UUID
const UUID_PATTERN: &str = "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

/// File extension of a stored attachment
const FILE_EXT_PATTERN: &str = r"\.[a-zA-Z0-9]{1,10}";

/// Compiled pattern locating attachment references in document markup
///
/// A match's full span is the attachment reference. When the pattern has a
/// capture group, its first group is the attachment's storage key.
#[derive(Debug, Clone)]
pub struct AttachmentPattern {
    regex: Regex,
}

impl AttachmentPattern {
    /// Compile a pattern from its regular expression source
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Pattern for the default media storage layout
    ///
    /// References look like `<media_url><document id>/<folder>/<file id>.<ext>`;
    /// the storage key is everything after `media_url`.
    pub fn for_media_storage(
        media_url: &str,
        attachments_folder: &str,
    ) -> Result<Self, PatternError> {
        Self::new(&format!(
            "{media}({uuid}/{folder}/{uuid}{ext})",
            media = regex::escape(media_url),
            uuid = UUID_PATTERN,
            folder = regex::escape(attachments_folder),
            ext = FILE_EXT_PATTERN,
        ))
    }

    /// Regular expression source of this pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// All non-overlapping references in `markup`, left to right
    ///
    /// Duplicates are kept: a file referenced twice appears twice.
    pub fn find_all(&self, markup: &str) -> Vec<String> {
        self.regex
            .find_iter(markup)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Storage key of a reference, if the pattern captures one
    pub fn storage_key(&self, reference: &str) -> Option<String> {
        self.regex
            .captures(reference)
            .and_then(|captures| captures.get(1))
            .map(|key| key.as_str().to_string())
    }
}
