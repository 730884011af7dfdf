//! Error types for document content extraction
//!
//! Every error here points at corrupt or incompatible stored content, never
//! at a transient condition, so none of them are retried.

use thiserror::Error;

/// The CRDT library rejected an update
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{0}")]
pub struct MergeError(pub String);

/// Serialized document markup could not be parsed
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{0}")]
pub struct ParseError(pub String);

/// The configured attachment pattern is not a valid regular expression
#[derive(Debug, Error)]
#[error("Invalid attachment pattern: {0}")]
pub struct PatternError(#[from] pub regex::Error);

/// Errors raised while extracting content from an encoded document
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid base64 content: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Failed to merge document update: {0}")]
    Merge(#[from] MergeError),

    #[error("Malformed document markup: {0}")]
    Parse(#[from] ParseError),
}

impl ContentError {
    /// Get the error code for logs and API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::Decode(_) => "CONTENT_DECODE_ERROR",
            ContentError::Merge(_) => "CONTENT_MERGE_ERROR",
            ContentError::Parse(_) => "CONTENT_PARSE_ERROR",
        }
    }

    #[mutants::skip] // Constant: stored content does not heal on retry
    pub fn is_retryable(&self) -> bool {
        false
    }
}
