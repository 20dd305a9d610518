use askama::Template;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Html,
};
use serde::Serialize;
use strum::VariantArray;

use atelier_contact::{BudgetBand, Inquiry, ServiceCategory};

use crate::{error::AppError, routes::AppState};

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    services: &'static [ServiceCategory],
    budgets: &'static [BudgetBand],
}

pub async fn page() -> Result<Html<String>, AppError> {
    let template = ContactTemplate {
        services: ServiceCategory::VARIANTS,
        budgets: BudgetBand::VARIANTS,
    };

    Ok(Html(template.render()?))
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/contact - the submission endpoint. Always answers JSON; any
/// failure inside the workflow is converted here, never propagated. A
/// malformed payload counts as a client error with a generic message.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<Inquiry>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let contact_address = state.config.email.contact_address.clone();

    let Ok(Json(inquiry)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse {
                success: false,
                message: format!(
                    "An unexpected error occurred. Please try again or contact us directly at {contact_address}"
                ),
            }),
        );
    };

    match state.contact.submit(inquiry).await {
        Ok(outcome) => {
            let status = if outcome.is_success() {
                StatusCode::OK
            } else {
                StatusCode::BAD_REQUEST
            };

            (
                status,
                Json(ContactResponse {
                    success: outcome.is_success(),
                    message: outcome.user_message(),
                }),
            )
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactResponse {
                success: false,
                message: err.user_message(&contact_address),
            }),
        ),
    }
}
