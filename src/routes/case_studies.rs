use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};

use atelier_content::CaseStudy;

use crate::{error::AppError, routes::AppState};

pub(crate) struct CaseStudyView {
    pub title: String,
    pub slug: String,
    pub client: Option<String>,
    pub industry: Option<String>,
    pub summary: Option<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub results: Option<String>,
    pub image_url: Option<String>,
    pub duration: Option<String>,
    /// Names of the expanded related services.
    pub services_used: Vec<String>,
}

impl From<CaseStudy> for CaseStudyView {
    fn from(study: CaseStudy) -> Self {
        let meta = study.metadata;
        Self {
            title: meta.project_title.unwrap_or(study.title),
            slug: study.slug,
            client: meta.client,
            industry: meta.industry,
            summary: meta.project_summary,
            challenge: meta.challenge,
            solution: meta.solution,
            results: meta.results,
            image_url: meta.featured_image.map(|image| image.imgix_url),
            duration: meta.project_duration,
            services_used: meta
                .services_used
                .unwrap_or_default()
                .into_iter()
                .map(|service| service.metadata.service_name.unwrap_or(service.title))
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "case_studies.html")]
struct CaseStudiesTemplate {
    case_studies: Vec<CaseStudyView>,
}

#[derive(Template)]
#[template(path = "case_study_detail.html")]
struct CaseStudyDetailTemplate {
    study: CaseStudyView,
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let case_studies = state
        .content
        .case_studies()
        .await?
        .into_iter()
        .map(CaseStudyView::from)
        .collect();

    Ok(Html(CaseStudiesTemplate { case_studies }.render()?))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let study = state
        .content
        .case_study_by_slug(&slug)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Html(
        CaseStudyDetailTemplate {
            study: study.into(),
        }
        .render()?,
    ))
}
