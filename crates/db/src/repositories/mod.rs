//! Per-collection repositories.
//!
//! Each repository is a zero-sized struct with associated async functions
//! that take the shared store explicitly, so handlers never reach for
//! ambient state.

pub mod movie_repo;
pub mod theatre_repo;
pub mod ticket_repo;
pub mod user_repo;

pub use movie_repo::MovieRepo;
pub use theatre_repo::TheatreRepo;
pub use ticket_repo::TicketRepo;
pub use user_repo::UserRepo;

use serde_json::Value;
use showtime_core::types::{Document, APP_ID_FIELD};

/// Filter matching the application-level `id` field.
pub(crate) fn id_filter(id: Value) -> Document {
    let mut filter = Document::new();
    filter.insert(APP_ID_FIELD.to_string(), id);
    filter
}
