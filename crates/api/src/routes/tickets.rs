use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tickets;
use crate::state::AppState;

/// ```text
/// GET  /tickets     -> list_tickets
/// POST /add-ticket  -> add_ticket
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(tickets::list_tickets))
        .route("/add-ticket", post(tickets::add_ticket))
}
