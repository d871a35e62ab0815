//! Repository for the `movies` collection.

use serde_json::Value;
use showtime_core::types::Document;

use super::id_filter;
use crate::collection::Collection;
use crate::store::{DocumentStore, InsertOutcome, StoreError};

/// Provides list, create, update and delete for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies matching an exact-match filter.
    pub async fn list(
        store: &dyn DocumentStore,
        filter: &Document,
    ) -> Result<Vec<Document>, StoreError> {
        store.find(Collection::Movies, filter).await
    }

    /// Insert a movie document as-is.
    pub async fn create(
        store: &dyn DocumentStore,
        movie: Document,
    ) -> Result<InsertOutcome, StoreError> {
        store.insert_one(Collection::Movies, movie).await
    }

    /// Merge `patch` into the movie whose `id` equals the given string.
    ///
    /// Returns `true` only if a movie was actually changed.
    pub async fn update_by_id(
        store: &dyn DocumentStore,
        id: &str,
        patch: &Document,
    ) -> Result<bool, StoreError> {
        let modified = store
            .update_one(Collection::Movies, &id_filter(Value::from(id)), patch)
            .await?;
        Ok(modified > 0)
    }

    /// Delete the movie whose `id` equals the given string.
    ///
    /// Returns `true` if a movie was removed.
    pub async fn delete_by_id(store: &dyn DocumentStore, id: &str) -> Result<bool, StoreError> {
        let deleted = store
            .delete_one(Collection::Movies, &id_filter(Value::from(id)))
            .await?;
        Ok(deleted > 0)
    }
}
