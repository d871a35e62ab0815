use axum::routing::post;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// POST /signup -> signup
/// POST /login  -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(users::signup))
        .route("/login", post(users::login))
}
