use askama::Template;
use axum::{extract::State, response::Html};

use atelier_content::ContentError;

use crate::{
    error::AppError,
    routes::{
        AppState, case_studies::CaseStudyView, services::ServiceView, team::TeamMemberView,
        testimonials::TestimonialView,
    },
};

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate {
    services: Vec<ServiceView>,
    case_studies: Vec<CaseStudyView>,
    members: Vec<TeamMemberView>,
    testimonials: Vec<TestimonialView>,
}

/// The home page issues its four content reads concurrently; a failed fetch
/// degrades that section to empty instead of failing the page.
pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (services, members, case_studies, testimonials) = tokio::join!(
        state.content.services(),
        state.content.team_members(),
        state.content.case_studies(),
        state.content.testimonials(),
    );

    let template = HomeTemplate {
        services: section(services, "services"),
        case_studies: section(case_studies, "case-studies"),
        members: section(members, "team-members"),
        testimonials: section(testimonials, "testimonials"),
    };

    Ok(Html(template.render()?))
}

fn section<T, V: From<T>>(result: Result<Vec<T>, ContentError>, kind: &str) -> Vec<V> {
    match result {
        Ok(objects) => objects.into_iter().map(V::from).collect(),
        Err(err) => {
            tracing::warn!(kind, error = %err, "content fetch failed, rendering empty section");
            Vec::new()
        }
    }
}
