//! Route definitions for the movie catalogue.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// ```text
/// GET    /              -> list_movies
/// POST   /add-movie     -> add_movie
/// PUT    /movies/{id}   -> update_movie
/// DELETE /movies/{id}   -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies))
        .route("/add-movie", post(movies::add_movie))
        .route(
            "/movies/{id}",
            put(movies::update_movie).delete(movies::delete_movie),
        )
}
