use atelier_notification::{MailError, Mailer};
use thiserror::Error;

use crate::{ContactSettings, Inquiry, RejectReason, message};

/// Result of one pass through the submission workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Staff notified and the confirmation delivered.
    Accepted,
    /// Staff notified but the confirmation send failed. Still an overall
    /// success: the business learned of the inquiry.
    PartialFailure,
    /// Validation failed; nothing was dispatched.
    Rejected(RejectReason),
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted | Self::PartialFailure)
    }

    /// Text surfaced to the submitter. The check-your-email clause only
    /// appears when the confirmation actually went out.
    pub fn user_message(&self) -> String {
        match self {
            Self::Accepted => {
                "Your message has been sent successfully! Check your email for confirmation \
                 and we'll get back to you within 24 hours."
                    .to_string()
            }
            Self::PartialFailure => {
                "Your message has been sent successfully! We'll get back to you within 24 hours."
                    .to_string()
            }
            Self::Rejected(reason) => reason.message().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The sending capability is absent; checked before validation.
    #[error("email delivery is not configured")]
    NotConfigured,

    /// The staff notification could not be sent, so the business never
    /// learned of the inquiry. The whole operation fails.
    #[error("failed to send the staff notification: {0}")]
    AdminDispatchFailed(#[source] MailError),

    #[error("failed to render an outgoing message: {0}")]
    Template(#[from] askama::Error),
}

impl SubmitError {
    /// User-facing text with the fallback channel spelled out.
    pub fn user_message(&self, contact_address: &str) -> String {
        match self {
            Self::NotConfigured => format!(
                "Email service is not configured. Please contact us directly at {contact_address}"
            ),
            Self::AdminDispatchFailed(_) => format!(
                "Failed to send notification. Please contact us directly at {contact_address}"
            ),
            Self::Template(_) => format!(
                "An unexpected error occurred. Please try again or contact us directly at {contact_address}"
            ),
        }
    }
}

/// The submission workflow: a single linear pass with early exits, at most
/// one send attempt per message, no retries and no queueing.
#[derive(Clone)]
pub struct ContactService<M> {
    mailer: Option<M>,
    settings: ContactSettings,
}

impl<M: Mailer> ContactService<M> {
    /// `mailer: None` models the unconfigured capability; every submission
    /// then fails with [`SubmitError::NotConfigured`].
    pub fn new(mailer: Option<M>, settings: ContactSettings) -> Self {
        Self { mailer, settings }
    }

    pub fn settings(&self) -> &ContactSettings {
        &self.settings
    }

    /// Turn a raw inquiry into zero, one or two outbound emails and a single
    /// outcome. Sends are sequential: the final outcome depends on the admin
    /// send, and a confirmation failure must not mask it.
    pub async fn submit(&self, inquiry: Inquiry) -> Result<DispatchOutcome, SubmitError> {
        let Some(mailer) = &self.mailer else {
            tracing::error!("contact form submitted but no email transport is configured");
            return Err(SubmitError::NotConfigured);
        };

        if let Err(reason) = inquiry.validate() {
            tracing::debug!(%reason, "rejected contact inquiry");
            return Ok(DispatchOutcome::Rejected(reason));
        }

        let admin = message::admin_notification(&inquiry, &self.settings)?;
        let confirmation = message::confirmation(&inquiry, &self.settings)?;

        // Staff notification first; its failure is not masked and the
        // confirmation is never attempted after it.
        if let Err(err) = mailer.send(admin).await {
            tracing::error!(error = %err, "failed to send staff notification");
            return Err(SubmitError::AdminDispatchFailed(err));
        }

        match mailer.send(confirmation).await {
            Ok(()) => {
                tracing::info!(service = %inquiry.service, "contact inquiry dispatched");
                Ok(DispatchOutcome::Accepted)
            }
            Err(err) => {
                // The critical step already succeeded; only the outgoing
                // message text changes.
                tracing::warn!(error = %err, "staff notified but confirmation send failed");
                Ok(DispatchOutcome::PartialFailure)
            }
        }
    }
}
