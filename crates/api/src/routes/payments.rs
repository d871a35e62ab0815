use axum::routing::post;
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/confirm-payment", post(payments::confirm_payment))
}
