//! Handlers for tickets (`/tickets`, `/add-ticket`).

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use showtime_core::filter::filter_from_query;
use showtime_core::types::Document;
use showtime_db::repositories::TicketRepo;

use super::require_object;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::response::MessageResponse;
use crate::state::AppState;

const TICKET_ADDED: &str = "ticket generated sucessfully!!";
const TICKET_NOT_ADDED: &str = "Something went wrong !!";

/// GET /tickets
pub async fn list_tickets(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<HashMap<String, String>>,
) -> AppResult<Json<Vec<Document>>> {
    let Some(filter) = filter_from_query(&params) else {
        return Ok(Json(Vec::new()));
    };

    let tickets = TicketRepo::list(state.store.as_ref(), &filter).await?;
    Ok(Json(tickets))
}

/// POST /add-ticket
pub async fn add_ticket(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<MessageResponse>> {
    let ticket = require_object(body, "ticket")?;

    let outcome = TicketRepo::create(state.store.as_ref(), ticket)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Ticket insert failed");
            AppError::NotAcknowledged(TICKET_NOT_ADDED)
        })?;

    if !outcome.acknowledged {
        return Err(AppError::NotAcknowledged(TICKET_NOT_ADDED));
    }

    tracing::info!(inserted_ids = ?outcome.inserted_ids, "Ticket generated");
    Ok(Json(MessageResponse::new(TICKET_ADDED)))
}
