use std::sync::Arc;

use showtime_db::DocumentStore;
use showtime_events::NotificationSender;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Created once in `main` and cloned per request; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Document store shared by every handler.
    pub store: Arc<dyn DocumentStore>,
    /// Server configuration (token signing secret, limits).
    pub config: Arc<ServerConfig>,
    /// Outbound email for payment confirmations.
    pub mailer: Arc<dyn NotificationSender>,
}
