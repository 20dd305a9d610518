use askama::Template;
use axum::{extract::State, response::Html};

use atelier_content::TeamMember;

use crate::{error::AppError, routes::AppState};

pub(crate) struct TeamMemberView {
    pub name: String,
    pub job_title: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub years_experience: Option<u32>,
}

impl From<TeamMember> for TeamMemberView {
    fn from(member: TeamMember) -> Self {
        let meta = member.metadata;
        Self {
            name: meta.full_name.unwrap_or(member.title),
            job_title: meta.job_title,
            bio: meta.bio,
            photo_url: meta.profile_photo.map(|photo| photo.imgix_url),
            email: meta.email,
            linkedin_url: meta.linkedin_url,
            years_experience: meta.years_experience,
        }
    }
}

#[derive(Template)]
#[template(path = "team.html")]
struct TeamTemplate {
    members: Vec<TeamMemberView>,
}

pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let members = state
        .content
        .team_members()
        .await?
        .into_iter()
        .map(TeamMemberView::from)
        .collect();

    Ok(Html(TeamTemplate { members }.render()?))
}
