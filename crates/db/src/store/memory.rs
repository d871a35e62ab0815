//! In-process backend with the same matching rules as PostgreSQL.
//!
//! Used by the HTTP tests and by `STORE_BACKEND=memory` for local runs.
//! Contents are lost when the process exits.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use showtime_core::types::{DbId, Document};
use tokio::sync::RwLock;

use super::{strip_storage_key, with_storage_key, DocumentStore, InsertOutcome, StoreError};
use crate::collection::Collection;

#[derive(Debug, Default)]
struct Inner {
    next_id: DbId,
    collections: HashMap<Collection, Vec<(DbId, Document)>>,
}

impl Inner {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// [`DocumentStore`] kept in memory behind an async `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<Inner>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored in `collection`.
    pub async fn count(&self, collection: Collection) -> usize {
        let inner = self.inner.read().await;
        inner.collections.get(&collection).map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find(
        &self,
        collection: Collection,
        filter: &Document,
    ) -> Result<Vec<Document>, StoreError> {
        let inner = self.inner.read().await;
        let docs = inner
            .collections
            .get(&collection)
            .into_iter()
            .flatten()
            .filter(|(_, doc)| matches_filter(doc, filter))
            .map(|(id, doc)| with_storage_key(doc.clone(), *id))
            .collect();
        Ok(docs)
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Document,
    ) -> Result<Option<Document>, StoreError> {
        let inner = self.inner.read().await;
        let doc = inner
            .collections
            .get(&collection)
            .into_iter()
            .flatten()
            .find(|(_, doc)| matches_filter(doc, filter))
            .map(|(id, doc)| with_storage_key(doc.clone(), *id));
        Ok(doc)
    }

    async fn insert_one(
        &self,
        collection: Collection,
        doc: Document,
    ) -> Result<InsertOutcome, StoreError> {
        self.insert_many(collection, vec![doc]).await
    }

    async fn insert_many(
        &self,
        collection: Collection,
        docs: Vec<Document>,
    ) -> Result<InsertOutcome, StoreError> {
        let mut inner = self.inner.write().await;
        let mut inserted_ids = Vec::with_capacity(docs.len());
        let mut rows = Vec::with_capacity(docs.len());

        for doc in docs {
            let id = inner.allocate_id();
            inserted_ids.push(id);
            rows.push((id, strip_storage_key(doc)));
        }
        inner.collections.entry(collection).or_default().extend(rows);

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_ids,
        })
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Document,
        patch: &Document,
    ) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let Some((_, doc)) = inner
            .collections
            .get_mut(&collection)
            .and_then(|rows| rows.iter_mut().find(|(_, doc)| matches_filter(doc, filter)))
        else {
            return Ok(0);
        };

        let changes: Vec<_> = strip_storage_key(patch.clone())
            .into_iter()
            .filter(|(key, value)| !doc.get(key).is_some_and(|old| json_eq(old, value)))
            .collect();
        if changes.is_empty() {
            return Ok(0);
        }

        doc.extend(changes);
        Ok(1)
    }

    async fn delete_one(
        &self,
        collection: Collection,
        filter: &Document,
    ) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(rows) = inner.collections.get_mut(&collection) else {
            return Ok(0);
        };

        match rows.iter().position(|(_, doc)| matches_filter(doc, filter)) {
            Some(index) => {
                rows.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// True when every filter field is present in `doc` with an equal value.
fn matches_filter(doc: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| doc.get(key).is_some_and(|actual| json_eq(actual, expected)))
}

/// JSON equality where numbers compare by value regardless of representation.
fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => x.as_f64() == y.as_f64(),
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| json_eq(x, y)))
        }
        _ => a == b,
    }
}
