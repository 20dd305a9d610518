use askama::Template;
use axum::{extract::State, response::Html};

use atelier_content::Testimonial;

use crate::{error::AppError, routes::AppState};

pub(crate) struct TestimonialView {
    pub client_name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub text: Option<String>,
    pub photo_url: Option<String>,
    /// Star count as the provider reports it ("1" through "5").
    pub rating: Option<String>,
}

impl From<Testimonial> for TestimonialView {
    fn from(testimonial: Testimonial) -> Self {
        let meta = testimonial.metadata;
        Self {
            client_name: meta.client_name.unwrap_or(testimonial.title),
            company: meta.company,
            position: meta.position,
            text: meta.testimonial_text,
            photo_url: meta.client_photo.map(|photo| photo.imgix_url),
            rating: meta.rating.map(|rating| rating.value),
        }
    }
}

#[derive(Template)]
#[template(path = "testimonials.html")]
struct TestimonialsTemplate {
    testimonials: Vec<TestimonialView>,
}

pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let testimonials = state
        .content
        .testimonials()
        .await?
        .into_iter()
        .map(TestimonialView::from)
        .collect();

    Ok(Html(TestimonialsTemplate { testimonials }.render()?))
}
