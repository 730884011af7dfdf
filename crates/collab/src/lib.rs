//! Collaborative document content
//!
//! Documents are stored as base64-encoded Yjs updates. This crate turns them
//! back into something the backend can use:
//! - the XML markup of the editor's `document-store` root
//! - plain text for full-text indexing
//! - attachment references for media storage bookkeeping

pub mod attachments;
pub mod error;
pub mod extractor;
pub mod markup;
pub mod replica;


pub use attachments::AttachmentPattern;
pub use error::{ContentError, MergeError, ParseError, PatternError};
pub use extractor::DocumentTextExtractor;
pub use markup::MarkupTree;
pub use replica::{Replica, YrsReplica};
