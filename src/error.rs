use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use atelier_content::ContentError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("content provider error: {0}")]
    Content(#[from] ContentError),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("not found")]
    NotFound,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    status_code: u16,
    error_title: &'static str,
    error_message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_title, error_message) = match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Page Not Found",
                "The page you are looking for does not exist.",
            ),
            AppError::Content(e) => {
                tracing::error!("content provider error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred. Please try again later.",
                )
            }
            AppError::Template(e) => {
                tracing::error!("failed to render template: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred. Please try again later.",
                )
            }
        };

        let template = ErrorPageTemplate {
            status_code: status_code.as_u16(),
            error_title,
            error_message,
        };

        match template.render() {
            Ok(html) => (status_code, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("failed to render error page: {e:?}");
                (status_code, error_message).into_response()
            }
        }
    }
}
