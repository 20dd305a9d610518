//! Email delivery over SMTP using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::header,
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::{MailError, Mailer, OutboundEmail};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@atelier.studio".to_string()
}

fn default_contact_address() -> String {
    "hello@atelier.studio".to_string()
}

impl EmailConfig {
    /// A blank host means no sending capability is available.
    pub fn is_configured(&self) -> bool {
        !self.smtp_host.is_empty()
    }
}

/// SMTP-backed mailer
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> Result<Self, MailError> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        tracing::info!(subject = %email.subject, "Sending email");

        let mut builder = Message::builder()
            .from(email.from.parse()?)
            .subject(email.subject);

        for to in &email.to {
            builder = builder.to(to.parse()?);
        }

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.parse()?);
        }

        let message = builder
            .header(header::ContentType::TEXT_HTML)
            .body(email.html)?;

        self.mailer.send(&message)?;

        Ok(())
    }
}
