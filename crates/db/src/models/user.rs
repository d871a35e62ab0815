//! User account document and DTOs.

use serde::Deserialize;
use serde_json::Value;
use showtime_core::types::{DbId, Document};

/// A stored account read back from the `users` collection.
///
/// Contains the password hash -- NEVER serialize this to API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub username: String,
    /// PHC-formatted hash, stored under the `password` key.
    #[serde(rename = "password")]
    pub password_hash: String,
}

/// DTO for creating a new account. The password must already be hashed.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    /// Document shape stored in the `users` collection.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("username".into(), Value::from(self.username.as_str()));
        doc.insert("password".into(), Value::from(self.password_hash.as_str()));
        doc
    }
}
