//! Handler for `POST /confirm-payment`.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use showtime_events::PaymentNotice;

use super::require_field;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

const PAYMENT_SUCCESSFUL: &str = "payment successful!!";
const PAYMENT_FAILED: &str = "payment failed!!";

/// Request body for `POST /confirm-payment`.
#[derive(Debug, Deserialize)]
pub struct ConfirmPaymentRequest {
    /// Recipient address.
    pub mail: Option<String>,
    /// Message embedded in the confirmation email.
    pub msg: Option<String>,
}

/// POST /confirm-payment
///
/// Send one confirmation email. Nothing is retried and repeated calls send
/// repeated emails.
pub async fn confirm_payment(
    State(state): State<AppState>,
    AppJson(input): AppJson<ConfirmPaymentRequest>,
) -> AppResult<Json<MessageResponse>> {
    let mail = require_field(input.mail, "mail")?;
    let msg = require_field(input.msg, "msg")?;

    let notice = PaymentNotice::render(&msg);
    state
        .mailer
        .send(&mail, &notice.subject, &notice.body)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, to = %mail, "Payment confirmation email failed");
            AppError::DeliveryFailed(PAYMENT_FAILED)
        })?;

    Ok(Json(MessageResponse::new(PAYMENT_SUCCESSFUL)))
}
