//! Route handlers, one module per resource.
//!
//! Every handler performs at most one document store call (login adds a
//! hash comparison, payment a mail send) and reports its outcome through
//! [`AppResult`], never by panicking.

pub mod movies;
pub mod payments;
pub mod theatre;
pub mod tickets;
pub mod users;

use serde_json::Value;
use showtime_core::types::Document;

use crate::error::{AppError, AppResult};

/// Require a JSON object body, naming the entity in the error message.
pub(crate) fn require_object(value: Value, entity: &str) -> AppResult<Document> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::BadRequest(format!(
            "{entity} payload must be a JSON object"
        ))),
    }
}

/// Require a non-empty update payload.
pub(crate) fn require_patch(value: Value, entity: &str) -> AppResult<Document> {
    let patch = require_object(value, entity)?;
    if patch.is_empty() {
        return Err(AppError::BadRequest(format!(
            "{entity} update must contain at least one field"
        )));
    }
    Ok(patch)
}

/// Require a string field that the client may have omitted.
pub(crate) fn require_field(value: Option<String>, name: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::BadRequest(format!("{name} is required")))
}
