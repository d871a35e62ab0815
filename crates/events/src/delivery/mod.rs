//! External delivery channels.

pub mod email;

use async_trait::async_trait;

use crate::delivery::email::EmailError;

/// Sends one message to one recipient and reports whether the relay
/// accepted it. Implementations do not retry.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError>;
}
