/// Subject line of every payment confirmation.
pub const PAYMENT_SUBJECT: &str = "Showtime: payment confirmation";

/// A payment confirmation rendered from the caller-supplied message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentNotice {
    pub subject: String,
    pub body: String,
}

impl PaymentNotice {
    pub fn render(message: &str) -> Self {
        let body = format!(
            "Hello,\n\n{}\n\nThank you for booking with Showtime. Enjoy the show!\n",
            message.trim()
        );
        Self {
            subject: PAYMENT_SUBJECT.to_string(),
            body,
        }
    }
}
