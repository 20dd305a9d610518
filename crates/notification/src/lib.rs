//! Outbound email capability: the message shape, the `Mailer` seam and the
//! SMTP-backed implementation.

mod service;

pub use service::*;

use async_trait::async_trait;

/// A single outgoing message handed to the sending capability.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid address in outgoing message: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build outgoing message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sending capability consumed by the submission workflow. A returned error
/// is definitive; callers do not retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError>;
}
