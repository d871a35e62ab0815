//! Handlers for theatre seats (`/theatre`, `/theatre/{id}`).

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use showtime_core::error::CoreError;
use showtime_core::filter::{coerce_number, filter_from_query};
use showtime_core::types::Document;
use showtime_db::repositories::TheatreRepo;

use super::{require_object, require_patch};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::response::MessageResponse;
use crate::state::AppState;

const SEATS_ADDED: &str = "seats added sucessfully!!";
const SEATS_NOT_ADDED: &str = "seats not added";
const SEAT_UPDATED: &str = "seat updated sucessfully!!";
const SEAT_NOT_FOUND: &str = "seat not found";

/// GET /theatre
pub async fn list_seats(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<HashMap<String, String>>,
) -> AppResult<Json<Vec<Document>>> {
    let Some(filter) = filter_from_query(&params) else {
        return Ok(Json(Vec::new()));
    };

    let seats = TheatreRepo::list(state.store.as_ref(), &filter).await?;
    Ok(Json(seats))
}

/// POST /theatre
///
/// Store a non-empty array of seat objects in one batch.
pub async fn add_seats(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<MessageResponse>> {
    let Value::Array(items) = body else {
        return Err(AppError::BadRequest(
            "seat payload must be a JSON array".into(),
        ));
    };
    if items.is_empty() {
        return Err(AppError::BadRequest(
            "seat payload must contain at least one seat".into(),
        ));
    }
    let seats = items
        .into_iter()
        .map(|item| require_object(item, "seat"))
        .collect::<AppResult<Vec<_>>>()?;
    let count = seats.len();

    let outcome = TheatreRepo::create_many(state.store.as_ref(), seats)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Seat batch insert failed");
            AppError::NotAcknowledged(SEATS_NOT_ADDED)
        })?;

    if !outcome.acknowledged {
        return Err(AppError::NotAcknowledged(SEATS_NOT_ADDED));
    }

    tracing::info!(count, "Seats added");
    Ok(Json(MessageResponse::new(SEATS_ADDED)))
}

/// PUT /theatre/{id}
///
/// Merge the body into the seat whose numeric `id` equals the path segment.
/// A path id that is not a number cannot match any seat.
pub async fn update_seat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<MessageResponse>> {
    let patch = require_patch(body, "seat")?;
    let not_found = || AppError::from(CoreError::NotFound(SEAT_NOT_FOUND.into()));

    let seat_id = coerce_number(&id).ok_or_else(not_found)?;
    if !TheatreRepo::update_by_id(state.store.as_ref(), seat_id, &patch).await? {
        return Err(not_found());
    }

    tracing::info!(seat_id = %id, fields = patch.len(), "Seat updated");
    Ok(Json(MessageResponse::new(SEAT_UPDATED)))
}
