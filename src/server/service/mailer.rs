//! Outgoing email seam.
//!
//! Services compose messages and hand them to a `Mailer`. Delivery is
//! pluggable; the default `LogMailer` only records the message in the log.

use async_trait::async_trait;
use sea_orm::ActiveEnum;

use crate::server::{
    error::mail::MailError,
    model::{inquiry::Inquiry, property::Property},
};

const SIGNATURE: &str = "RealEstate Pro";

/// A plain text email.
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers one message.
    async fn send(&self, email: Email) -> Result<(), MailError>;
}

/// Mailer that writes every message to the log instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Email:\n{}",
            email.body
        );

        Ok(())
    }
}

/// Composes the notification sent to a listing's agent for a new inquiry.
pub fn inquiry_notification(agent_email: &str, property: &Property, inquiry: &Inquiry) -> Email {
    let body = format!(
        "You have received a new inquiry for your property: {title}\n\n\
         From: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\n\
         Message:\n{message}\n\n\
         Inquiry Type: {inquiry_type}\n\
         Preferred Contact Method: {contact_method}\n\n\
         Please log in to your dashboard to respond.",
        title = property.title,
        name = inquiry.name,
        email = inquiry.email,
        phone = inquiry.phone,
        message = inquiry.message,
        inquiry_type = inquiry.inquiry_type.to_value(),
        contact_method = inquiry.preferred_contact_method.to_value(),
    );

    Email {
        to: agent_email.to_string(),
        subject: format!("New Inquiry for {} - {}", property.title, SIGNATURE),
        body,
    }
}

/// Composes the reply sent to the person who submitted an inquiry.
pub fn inquiry_response(inquiry: &Inquiry, response: &str) -> Email {
    let body = format!(
        "Dear {name},\n\n\
         Thank you for your interest. Here is the response to your inquiry:\n\n\
         {response}\n\n\
         Best regards,\n\
         {SIGNATURE} Team",
        name = inquiry.name,
    );

    Email {
        to: inquiry.email.clone(),
        subject: format!("Response to Your Property Inquiry - {}", SIGNATURE),
        body,
    }
}
