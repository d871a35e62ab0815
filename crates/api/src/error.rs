use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use showtime_core::error::CoreError;
use showtime_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "msg": ..., "code": ... }`
/// bodies with one status convention across every route.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `showtime_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An unexpected document store failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A malformed request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Storage did not acknowledge an insert. Carries the route's message.
    #[error("Insert not acknowledged: {0}")]
    NotAcknowledged(&'static str),

    /// The mail relay rejected or could not receive a message.
    #[error("Delivery failed: {0}")]
    DeliveryFailed(&'static str),

    /// An internal error with a message that is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Body returned for every 500 so internals never leak.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Document store error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotAcknowledged(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "NOT_ACKNOWLEDGED",
                (*msg).to_string(),
            ),
            AppError::DeliveryFailed(msg) => {
                (StatusCode::BAD_GATEWAY, "DELIVERY_FAILED", (*msg).to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "msg": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_ERROR_MESSAGE.to_string(),
    )
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
