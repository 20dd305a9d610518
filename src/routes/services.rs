use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};

use atelier_content::Service;

use crate::{error::AppError, routes::AppState};

/// Page-facing projection of a service record.
pub(crate) struct ServiceView {
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub starting_price: Option<String>,
    pub icon_url: Option<String>,
    pub key_features: Vec<String>,
}

impl From<Service> for ServiceView {
    fn from(service: Service) -> Self {
        let meta = service.metadata;
        Self {
            name: meta.service_name.unwrap_or(service.title),
            slug: service.slug,
            short_description: meta.short_description,
            full_description: meta.full_description,
            starting_price: meta.starting_price,
            icon_url: meta.service_icon.map(|icon| icon.imgix_url),
            key_features: meta.key_features.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "services.html")]
struct ServicesTemplate {
    services: Vec<ServiceView>,
}

#[derive(Template)]
#[template(path = "service_detail.html")]
struct ServiceDetailTemplate {
    service: ServiceView,
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let services = state
        .content
        .services()
        .await?
        .into_iter()
        .map(ServiceView::from)
        .collect();

    Ok(Html(ServicesTemplate { services }.render()?))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let service = state
        .content
        .service_by_slug(&slug)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Html(
        ServiceDetailTemplate {
            service: service.into(),
        }
        .render()?,
    ))
}
