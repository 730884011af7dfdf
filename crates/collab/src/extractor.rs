//! Document text extraction
//!
//! Every operation decodes the stored content into a replica of its own:
//! create, apply the update once, read the root, drop. Nothing is shared
//! between calls, so one extractor can serve any number of threads.

use std::marker::PhantomData;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::attachments::AttachmentPattern;
use crate::error::ContentError;
use crate::markup::MarkupTree;
use crate::replica::{Replica, YrsReplica};

/// Root element the editor stores document content under
pub const DOCUMENT_STORE_ROOT: &str = "document-store";

/// Separator placed between text nodes of extracted text
pub const TEXT_SEPARATOR: &str = " ";

/// Extracts markup, text and attachment references from encoded documents
pub struct DocumentTextExtractor<R = YrsReplica> {
    root_name: String,
    pattern: AttachmentPattern,
    _replica: PhantomData<fn() -> R>,
}

impl<R> Clone for DocumentTextExtractor<R> {
    fn clone(&self) -> Self {
        Self {
            root_name: self.root_name.clone(),
            pattern: self.pattern.clone(),
            _replica: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for DocumentTextExtractor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentTextExtractor")
            .field("root_name", &self.root_name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

impl DocumentTextExtractor<YrsReplica> {
    /// Create an extractor backed by `yrs` replicas
    pub fn new(pattern: AttachmentPattern) -> Self {
        Self::with_replica(pattern)
    }
}

impl<R: Replica> DocumentTextExtractor<R> {
    /// Create an extractor backed by replicas of type `R`
    pub fn with_replica(pattern: AttachmentPattern) -> Self {
        Self {
            root_name: DOCUMENT_STORE_ROOT.to_string(),
            pattern,
            _replica: PhantomData,
        }
    }

    /// Read content from a different root element
    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn pattern(&self) -> &AttachmentPattern {
        &self.pattern
    }

    /// Decode a base64 update and serialize the document root to markup
    ///
    /// Line breaks and other ASCII whitespace in `encoded` are ignored, so
    /// wrapped base64 decodes the same as a single line.
    pub fn decode_to_markup(&self, encoded: &str) -> Result<String, ContentError> {
        let update = decode_base64(encoded)?;
        tracing::debug!(bytes = update.len(), "Decoded document update");

        let mut replica = R::new_document();
        replica.apply_update(&update)?;
        let markup = replica.xml_element(&self.root_name);

        tracing::debug!(
            root = %self.root_name,
            markup_len = markup.len(),
            "Serialized document root"
        );
        Ok(markup)
    }

    /// Plain text of an encoded document, for full-text indexing
    pub fn extract_text(&self, encoded: &str) -> Result<String, ContentError> {
        let markup = self.decode_to_markup(encoded)?;
        let tree = MarkupTree::parse(&markup)?;
        Ok(tree.text(TEXT_SEPARATOR))
    }

    /// Attachment references of an encoded document, in order of appearance
    ///
    /// Empty or absent content has no attachments and is not decoded.
    pub fn extract_attachments(&self, encoded: Option<&str>) -> Result<Vec<String>, ContentError> {
        let encoded = match encoded {
            Some(encoded) if !encoded.is_empty() => encoded,
            _ => return Ok(Vec::new()),
        };

        let markup = self.decode_to_markup(encoded)?;
        let references = self.pattern.find_all(&markup);
        tracing::debug!(count = references.len(), "Extracted attachment references");
        Ok(references)
    }
}

fn decode_base64(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if encoded.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        STANDARD.decode(compact)
    } else {
        STANDARD.decode(encoded)
    }
}
