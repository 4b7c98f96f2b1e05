use thiserror::Error;

/// Failure reported by a `Mailer`. Never surfaces to clients.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("Failed to deliver email to {to}: {reason}")]
    Delivery { to: String, reason: String },
}
