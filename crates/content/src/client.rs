use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use url::Url;

use crate::types::ObjectsResponse;
use crate::{CaseStudy, ContentObject, Service, TeamMember, Testimonial};

const PROPS: &str = "id,slug,title,content,metadata";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content api request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content api returned status {0}")]
    Status(StatusCode),

    #[error("invalid content api url: {0}")]
    Url(#[from] url::ParseError),
}

/// Read-only client for the content API. Cheap to clone; the underlying
/// HTTP client is shared.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    objects_url: Url,
    read_key: String,
}

impl ContentClient {
    pub fn new(api_url: &str, bucket_slug: &str, read_key: &str) -> Result<Self, ContentError> {
        let objects_url = Url::parse(&format!(
            "{}/buckets/{}/objects",
            api_url.trim_end_matches('/'),
            bucket_slug
        ))?;

        Ok(Self {
            http: reqwest::Client::new(),
            objects_url,
            read_key: read_key.to_string(),
        })
    }

    pub async fn services(&self) -> Result<Vec<Service>, ContentError> {
        self.find(json!({"type": "services"})).await
    }

    pub async fn service_by_slug(&self, slug: &str) -> Result<Option<Service>, ContentError> {
        self.find_one(json!({"type": "services", "slug": slug})).await
    }

    pub async fn team_members(&self) -> Result<Vec<TeamMember>, ContentError> {
        self.find(json!({"type": "team-members"})).await
    }

    pub async fn case_studies(&self) -> Result<Vec<CaseStudy>, ContentError> {
        self.find(json!({"type": "case-studies"})).await
    }

    pub async fn case_study_by_slug(&self, slug: &str) -> Result<Option<CaseStudy>, ContentError> {
        self.find_one(json!({"type": "case-studies", "slug": slug}))
            .await
    }

    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, ContentError> {
        self.find(json!({"type": "testimonials"})).await
    }

    /// Query objects by the given criteria with one level of related-object
    /// expansion. The API reports an empty result set as 404; that maps to
    /// an empty list here, not an error.
    async fn find<M>(&self, query: serde_json::Value) -> Result<Vec<ContentObject<M>>, ContentError>
    where
        M: DeserializeOwned + Default,
    {
        let criteria = query.to_string();
        let response = self
            .http
            .get(self.objects_url.clone())
            .query(&[
                ("query", criteria.as_str()),
                ("read_key", self.read_key.as_str()),
                ("props", PROPS),
                ("depth", "1"),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(%query, "content query matched nothing");
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(ContentError::Status(response.status()));
        }

        let body: ObjectsResponse<M> = response.json().await?;
        Ok(body.objects)
    }

    async fn find_one<M>(
        &self,
        query: serde_json::Value,
    ) -> Result<Option<ContentObject<M>>, ContentError>
    where
        M: DeserializeOwned + Default,
    {
        Ok(self.find(query).await?.into_iter().next())
    }
}
