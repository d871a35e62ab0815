//! Repository for the `users` collection.

use serde_json::Value;
use showtime_core::types::Document;

use crate::collection::Collection;
use crate::models::user::{NewUser, User};
use crate::store::{DocumentStore, InsertOutcome, StoreError};

/// Provides account lookup and creation.
pub struct UserRepo;

impl UserRepo {
    /// Find an account by username (case-sensitive).
    pub async fn find_by_username(
        store: &dyn DocumentStore,
        username: &str,
    ) -> Result<Option<User>, StoreError> {
        let mut filter = Document::new();
        filter.insert("username".to_string(), Value::from(username));

        match store.find_one(Collection::Users, &filter).await? {
            Some(doc) => Ok(Some(serde_json::from_value(Value::Object(doc))?)),
            None => Ok(None),
        }
    }

    /// Insert a new account. Uniqueness is the caller's responsibility.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &NewUser,
    ) -> Result<InsertOutcome, StoreError> {
        store.insert_one(Collection::Users, input.to_document()).await
    }
}
