//! Showtime outbound notifications.
//!
//! - [`NotificationSender`] -- the seam handlers depend on.
//! - [`delivery::email`] -- SMTP delivery through `lettre`.
//! - [`template`] -- the payment confirmation message layout.

pub mod delivery;
pub mod template;

pub use delivery::email::{EmailConfig, EmailDelivery, EmailError, UnconfiguredSender};
pub use delivery::NotificationSender;
pub use template::PaymentNotice;
