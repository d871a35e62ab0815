//! SMTP delivery of customer emails.
//!
//! The relay settings come from `SMTP_*` variables. With no `SMTP_HOST` the
//! server runs with an [`UnconfiguredSender`], so payment confirmations
//! report failure instead of silently dropping mail.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::NotificationSender;

/// Why an email could not be handed to the relay.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not build email: {0}")]
    Build(String),

    #[error("no SMTP relay configured")]
    NotConfigured,
}

const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_ADDRESS: &str = "noreply@showtime.local";

/// Relay connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub from_address: String,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Read relay settings from the process environment.
    ///
    /// `None` means mail is disabled (`SMTP_HOST` unset). The sender falls
    /// back to `SMTP_USER`, then to `noreply@showtime.local`; an unparsable
    /// `SMTP_PORT` falls back to 587.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let smtp_host = var("SMTP_HOST").filter(|h| !h.is_empty())?;
        let smtp_user = var("SMTP_USER");
        let from_address = var("SMTP_FROM")
            .or_else(|| smtp_user.clone())
            .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_owned());
        let smtp_port = var("SMTP_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);

        Some(Self {
            smtp_host,
            smtp_port,
            from_address,
            smtp_user,
            smtp_password: var("SMTP_PASSWORD"),
        })
    }
}

/// Plain-text mail over a STARTTLS relay. The transport pools connections,
/// so one instance serves every request.
pub struct EmailDelivery {
    from_address: String,
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailDelivery {
    /// Build the SMTP transport once for the lifetime of the process.
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        let mut relay = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);
        if let (Some(user), Some(password)) = (config.smtp_user, config.smtp_password) {
            relay = relay.credentials(Credentials::new(user, password));
        }

        tracing::info!(host = %config.smtp_host, port = config.smtp_port, "SMTP relay configured");
        Ok(Self {
            from_address: config.from_address,
            mailer: relay.build(),
        })
    }
}

#[async_trait]
impl NotificationSender for EmailDelivery {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        let message = Message::builder()
            .from(self.from_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_owned())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let response = self.mailer.send(message).await?;
        tracing::info!(to, subject, code = %response.code(), "Email accepted by relay");
        Ok(())
    }
}

/// Stand-in used when no relay is configured; every send fails.
#[derive(Debug, Default)]
pub struct UnconfiguredSender;

#[async_trait]
impl NotificationSender for UnconfiguredSender {
    async fn send(&self, to: &str, _subject: &str, _body: &str) -> Result<(), EmailError> {
        tracing::warn!(to, "Email requested but SMTP_HOST is not configured");
        Err(EmailError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Option<EmailConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EmailConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn mail_is_disabled_without_a_relay_host() {
        assert_eq!(config_from(&[("SMTP_USER", "box-office@cinema.test")]), None);
        assert_eq!(config_from(&[("SMTP_HOST", "")]), None);
    }

    #[test]
    fn sender_falls_back_to_relay_login_then_default() {
        let config = config_from(&[
            ("SMTP_HOST", "smtp.cinema.test"),
            ("SMTP_USER", "box-office@cinema.test"),
        ])
        .unwrap();
        assert_eq!(config.from_address, "box-office@cinema.test");
        assert_eq!(config.smtp_port, 587);

        let config = config_from(&[("SMTP_HOST", "smtp.cinema.test")]).unwrap();
        assert_eq!(config.from_address, "noreply@showtime.local");
        assert_eq!(config.smtp_user, None);
    }

    #[test]
    fn explicit_sender_and_port_win() {
        let config = config_from(&[
            ("SMTP_HOST", "smtp.cinema.test"),
            ("SMTP_PORT", "2525"),
            ("SMTP_FROM", "tickets@cinema.test"),
            ("SMTP_USER", "relay-login"),
            ("SMTP_PASSWORD", "hunter22"),
        ])
        .unwrap();

        assert_eq!(config.smtp_port, 2525);
        assert_eq!(config.from_address, "tickets@cinema.test");
        assert_eq!(config.smtp_password.as_deref(), Some("hunter22"));
    }

    #[test]
    fn bad_port_uses_default() {
        let config =
            config_from(&[("SMTP_HOST", "smtp.cinema.test"), ("SMTP_PORT", "lots")]).unwrap();
        assert_eq!(config.smtp_port, 587);
    }

    #[test]
    fn bad_recipient_is_an_address_error() {
        let err: EmailError = "not-an-email".parse::<lettre::Address>().unwrap_err().into();
        assert!(err.to_string().starts_with("invalid email address"));
    }

    #[tokio::test]
    async fn unconfigured_sender_always_fails() {
        let result = UnconfiguredSender
            .send("alice@cinema.test", "Payment confirmation", "paid")
            .await;
        assert!(matches!(result, Err(EmailError::NotConfigured)));
    }
}
