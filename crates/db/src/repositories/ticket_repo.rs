//! Repository for the `tickets` collection.

use showtime_core::types::Document;

use crate::collection::Collection;
use crate::store::{DocumentStore, InsertOutcome, StoreError};

pub struct TicketRepo;

impl TicketRepo {
    pub async fn list(
        store: &dyn DocumentStore,
        filter: &Document,
    ) -> Result<Vec<Document>, StoreError> {
        store.find(Collection::Tickets, filter).await
    }

    pub async fn create(
        store: &dyn DocumentStore,
        ticket: Document,
    ) -> Result<InsertOutcome, StoreError> {
        store.insert_one(Collection::Tickets, ticket).await
    }
}
