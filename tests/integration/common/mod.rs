//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests including:
//! - Encoded collaborative documents built with the CRDT library
//! - Application setup with mock email delivery

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine as _};
use yrs::{
    Doc, ReadTxn, StateVector, Transact, XmlElementPrelim, XmlFragment, XmlTextPrelim,
};

use impress_app::App;
use impress_common::Config;
use impress_email::EmailConfig;

pub const DOCUMENT_STORE: &str = "document-store";

/// Builder for collaborative documents as the editor stores them
pub struct DocumentFixture {
    doc: Doc,
    root: String,
}

impl DocumentFixture {
    pub fn new() -> Self {
        Self::with_root(DOCUMENT_STORE)
    }

    /// Document whose content lives under a different root element
    pub fn with_root(root: &str) -> Self {
        Self {
            doc: Doc::new(),
            root: root.to_string(),
        }
    }

    /// Append a paragraph holding `text` to the document root
    pub fn paragraph(self, text: &str) -> Self {
        let fragment = self.doc.get_or_insert_xml_fragment(self.root.as_str());
        {
            let mut txn = self.doc.transact_mut();
            let paragraph = fragment.push_back(&mut txn, XmlElementPrelim::empty("paragraph"));
            paragraph.push_back(&mut txn, XmlTextPrelim::new(text));
        }
        self
    }

    /// Full state of the document as a binary update
    pub fn update(&self) -> Vec<u8> {
        self.doc
            .transact()
            .encode_state_as_update_v1(&StateVector::default())
    }

    /// Full state of the document, base64-encoded as stored
    pub fn encoded(&self) -> String {
        STANDARD.encode(self.update())
    }
}

/// Application with default configuration and a mock email service
pub fn test_app() -> App {
    App::new(Config::default(), EmailConfig::default()).expect("default configuration is valid")
}

/// Lowercase attachment reference in the default media layout
pub fn media_reference(document_id: &str, file_id: &str, ext: &str) -> String {
    format!("/media/{document_id}/attachments/{file_id}.{ext}")
}
