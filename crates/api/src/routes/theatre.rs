use axum::routing::{get, put};
use axum::Router;

use crate::handlers::theatre;
use crate::state::AppState;

/// ```text
/// GET  /theatre       -> list_seats
/// POST /theatre       -> add_seats
/// PUT  /theatre/{id}  -> update_seat
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/theatre", get(theatre::list_seats).post(theatre::add_seats))
        .route("/theatre/{id}", put(theatre::update_seat))
}
