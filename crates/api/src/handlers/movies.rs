//! Handlers for the movie catalogue (`/`, `/add-movie`, `/movies/{id}`).

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use showtime_core::error::CoreError;
use showtime_core::filter::filter_from_query;
use showtime_core::types::Document;
use showtime_db::repositories::MovieRepo;

use super::{require_object, require_patch};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::response::MessageResponse;
use crate::state::AppState;

const MOVIE_ADDED: &str = "movie added sucessfully!!";
const MOVIE_NOT_ADDED: &str = "movie not added";
const MOVIE_UPDATED: &str = "movie updated sucessfully!!";
const MOVIE_DELETED: &str = "movie deleted sucessfully!!";
const MOVIE_NOT_FOUND: &str = "movie not found";

/// GET /
///
/// List movies matching the query string as an exact-match filter.
/// `rating` is compared numerically; a non-numeric rating matches nothing.
pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<HashMap<String, String>>,
) -> AppResult<Json<Vec<Document>>> {
    let Some(filter) = filter_from_query(&params) else {
        return Ok(Json(Vec::new()));
    };

    let movies = MovieRepo::list(state.store.as_ref(), &filter).await?;
    Ok(Json(movies))
}

/// POST /add-movie
///
/// Store the body as a new movie document.
pub async fn add_movie(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<MessageResponse>> {
    let movie = require_object(body, "movie")?;

    let outcome = MovieRepo::create(state.store.as_ref(), movie)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Movie insert failed");
            AppError::NotAcknowledged(MOVIE_NOT_ADDED)
        })?;

    if !outcome.acknowledged {
        return Err(AppError::NotAcknowledged(MOVIE_NOT_ADDED));
    }

    tracing::info!(inserted_ids = ?outcome.inserted_ids, "Movie added");
    Ok(Json(MessageResponse::new(MOVIE_ADDED)))
}

/// PUT /movies/{id}
///
/// Merge the body into the movie whose `id` field equals the path segment.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<MessageResponse>> {
    let patch = require_patch(body, "movie")?;

    if !MovieRepo::update_by_id(state.store.as_ref(), &id, &patch).await? {
        return Err(CoreError::NotFound(MOVIE_NOT_FOUND.into()).into());
    }

    tracing::info!(movie_id = %id, fields = patch.len(), "Movie updated");
    Ok(Json(MessageResponse::new(MOVIE_UPDATED)))
}

/// DELETE /movies/{id}
///
/// Remove the movie whose `id` field equals the path segment.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !MovieRepo::delete_by_id(state.store.as_ref(), &id).await? {
        return Err(CoreError::NotFound(MOVIE_NOT_FOUND.into()).into());
    }

    tracing::info!(movie_id = %id, "Movie deleted");
    Ok(Json(MessageResponse::new(MOVIE_DELETED)))
}
