//! Repository for the `theatre_seats` collection.

use serde_json::{Number, Value};
use showtime_core::types::Document;

use super::id_filter;
use crate::collection::Collection;
use crate::store::{DocumentStore, InsertOutcome, StoreError};

/// Provides list, bulk create and update for theatre seats.
pub struct TheatreRepo;

impl TheatreRepo {
    /// List seats matching an exact-match filter.
    pub async fn list(
        store: &dyn DocumentStore,
        filter: &Document,
    ) -> Result<Vec<Document>, StoreError> {
        store.find(Collection::TheatreSeats, filter).await
    }

    /// Insert a batch of seats atomically.
    pub async fn create_many(
        store: &dyn DocumentStore,
        seats: Vec<Document>,
    ) -> Result<InsertOutcome, StoreError> {
        store.insert_many(Collection::TheatreSeats, seats).await
    }

    /// Merge `patch` into the seat whose numeric `id` equals `id`.
    ///
    /// Returns `true` only if a seat was actually changed.
    pub async fn update_by_id(
        store: &dyn DocumentStore,
        id: Number,
        patch: &Document,
    ) -> Result<bool, StoreError> {
        let modified = store
            .update_one(Collection::TheatreSeats, &id_filter(Value::Number(id)), patch)
            .await?;
        Ok(modified > 0)
    }
}
