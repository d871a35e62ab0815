//! The document store abstraction and its two backends.
//!
//! Filters are exact-match maps over top-level fields. Numbers compare by
//! value (`8` matches `8.0`) and never match strings (`8` does not match
//! `"8"`). Writes never persist a client-supplied `_id`; the storage key is
//! attached on every read instead.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::Value;
use showtime_core::types::{DbId, Document, STORAGE_KEY_FIELD};

use crate::collection::Collection;

/// Error type for document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document did not have the expected shape.
    #[error("Document decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of an insert: whether storage accepted every document, and the
/// keys it assigned in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_ids: Vec<DbId>,
}

/// Filtered reads and single/bulk writes over the four collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents matching `filter`, in insertion order.
    async fn find(
        &self,
        collection: Collection,
        filter: &Document,
    ) -> Result<Vec<Document>, StoreError>;

    /// The first document matching `filter`, if any.
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Insert one document as-is.
    async fn insert_one(
        &self,
        collection: Collection,
        doc: Document,
    ) -> Result<InsertOutcome, StoreError>;

    /// Insert several documents; either all are stored or none are.
    async fn insert_many(
        &self,
        collection: Collection,
        docs: Vec<Document>,
    ) -> Result<InsertOutcome, StoreError>;

    /// Merge `patch` into the first document matching `filter`.
    ///
    /// Top-level keys of `patch` replace or extend the stored document.
    /// Returns the number of documents modified (0 or 1): a match whose
    /// fields already hold the patch values counts as 0.
    async fn update_one(
        &self,
        collection: Collection,
        filter: &Document,
        patch: &Document,
    ) -> Result<u64, StoreError>;

    /// Delete the first document matching `filter`. Returns 0 or 1.
    async fn delete_one(&self, collection: Collection, filter: &Document)
        -> Result<u64, StoreError>;

    /// Confirm the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Remove the storage-owned key from a client payload.
pub(crate) fn strip_storage_key(mut doc: Document) -> Document {
    doc.remove(STORAGE_KEY_FIELD);
    doc
}

/// Attach the storage key to a document read from a backend.
pub(crate) fn with_storage_key(mut doc: Document, key: DbId) -> Document {
    doc.insert(STORAGE_KEY_FIELD.to_string(), Value::from(key));
    doc
}
