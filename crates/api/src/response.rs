//! Shared response body types for API handlers.

use serde::Serialize;

/// The `{ "msg": ... }` body every mutating route answers with.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

impl MessageResponse {
    pub fn new(msg: &'static str) -> Self {
        Self { msg }
    }
}
