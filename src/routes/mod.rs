use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};

mod assets;
mod case_studies;
mod contact;
mod health;
mod home;
mod services;
mod team;
mod testimonials;

pub use assets::AssetsService;

use atelier_contact::ContactService;
use atelier_content::ContentClient;
use atelier_notification::EmailService;

use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub content: ContentClient,
    pub contact: ContactService<EmailService>,
}

pub async fn fallback() -> impl IntoResponse {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(home::page))
        .route("/services", get(services::index))
        .route("/services/{slug}", get(services::detail))
        .route("/case-studies", get(case_studies::index))
        .route("/case-studies/{slug}", get(case_studies::detail))
        .route("/team", get(team::page))
        .route("/testimonials", get(testimonials::page))
        .route("/contact", get(contact::page))
        .route("/api/contact", post(contact::submit))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
