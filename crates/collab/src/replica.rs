//! Document replicas
//!
//! A replica is an in-memory CRDT document. The extractor only ever creates
//! one, applies a single update to it, reads one root back and drops it, so
//! the trait covers exactly that surface.

use yrs::updates::decoder::Decode;
use yrs::{Doc, GetString, Transact, Update};

use crate::error::MergeError;

/// In-memory collaborative document
pub trait Replica: Sized {
    /// Create a fresh, empty replica
    fn new_document() -> Self;

    /// Merge a binary update into the replica
    fn apply_update(&mut self, update: &[u8]) -> Result<(), MergeError>;

    /// Serialize the named root XML element to markup
    fn xml_element(&self, name: &str) -> String;
}

/// Replica backed by `yrs`, reading Yjs binary updates (v1 encoding)
pub struct YrsReplica {
    doc: Doc,
}

impl Replica for YrsReplica {
    fn new_document() -> Self {
        Self { doc: Doc::new() }
    }

    fn apply_update(&mut self, update: &[u8]) -> Result<(), MergeError> {
        let update = Update::decode_v1(update).map_err(|e| MergeError(e.to_string()))?;
        let mut txn = self.doc.transact_mut();
        txn.apply_update(update)
            .map_err(|e| MergeError(e.to_string()))
    }

    fn xml_element(&self, name: &str) -> String {
        // Must be resolved before opening the read transaction
        let root = self.doc.get_or_insert_xml_fragment(name);
        let txn = self.doc.transact();
        root.get_string(&txn)
    }
}
