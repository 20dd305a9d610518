pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

use atelier_contact::{ContactService, ContactSettings};
use atelier_content::ContentClient;
use atelier_notification::EmailService;

/// Build the application router from configuration.
///
/// Also used by integration tests to exercise routes without binding a
/// listener.
pub fn create_app(config: config::Config) -> anyhow::Result<axum::Router> {
    let content = ContentClient::new(
        &config.content.api_url,
        &config.content.bucket_slug,
        &config.content.read_key,
    )?;

    let mailer = if config.email.is_configured() {
        Some(EmailService::new(&config.email)?)
    } else {
        tracing::warn!("email.smtp_host is empty, contact form dispatch is disabled");
        None
    };

    let contact = ContactService::new(
        mailer,
        ContactSettings {
            contact_address: config.email.contact_address.clone(),
            from_address: config.email.from_address.clone(),
        },
    );

    let state = AppState {
        config,
        content,
        contact,
    };

    Ok(routes::router(state))
}
