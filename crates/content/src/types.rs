use serde::Deserialize;

/// One record returned by the content API. `metadata` carries the
/// type-specific fields; everything in it is optional and pages fall back
/// gracefully when a field is absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "M: Deserialize<'de> + Default"))]
pub struct ContentObject<M> {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: M,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageAsset {
    pub url: String,
    pub imgix_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceMetadata {
    pub service_name: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub starting_price: Option<String>,
    pub service_icon: Option<ImageAsset>,
    pub key_features: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamMemberMetadata {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub bio: Option<String>,
    pub profile_photo: Option<ImageAsset>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub years_experience: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CaseStudyMetadata {
    pub project_title: Option<String>,
    pub client: Option<String>,
    pub industry: Option<String>,
    pub project_summary: Option<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub results: Option<String>,
    pub featured_image: Option<ImageAsset>,
    pub project_duration: Option<String>,
    /// Expanded one level by the API when `depth=1` is requested.
    pub services_used: Option<Vec<Service>>,
    pub key_metrics: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rating {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestimonialMetadata {
    pub client_name: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub testimonial_text: Option<String>,
    pub rating: Option<Rating>,
    pub client_photo: Option<ImageAsset>,
    pub featured: Option<bool>,
}

pub type Service = ContentObject<ServiceMetadata>;
pub type TeamMember = ContentObject<TeamMemberMetadata>;
pub type CaseStudy = ContentObject<CaseStudyMetadata>;
pub type Testimonial = ContentObject<TestimonialMetadata>;

/// Response envelope for object queries.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "M: Deserialize<'de> + Default"))]
pub(crate) struct ObjectsResponse<M> {
    #[serde(default = "Vec::new")]
    pub objects: Vec<ContentObject<M>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_service_payload_deserializes() {
        let payload = serde_json::json!({
            "objects": [{
                "id": "svc-1",
                "slug": "web-development",
                "title": "Web Development",
                "metadata": {
                    "service_name": "Web Development",
                    "short_description": "Modern, fast sites.",
                    "starting_price": "$5,000",
                    "service_icon": {
                        "url": "https://cdn.example.com/icon.png",
                        "imgix_url": "https://imgix.example.com/icon.png"
                    },
                    "key_features": ["Design", "Build", "Launch"],
                    "internal_only_flag": true
                }
            }]
        });

        let response: ObjectsResponse<ServiceMetadata> =
            serde_json::from_value(payload).unwrap();
        let service = &response.objects[0];

        assert_eq!(service.slug, "web-development");
        assert_eq!(service.metadata.service_name.as_deref(), Some("Web Development"));
        assert_eq!(
            service.metadata.key_features.as_deref(),
            Some(&["Design".to_string(), "Build".to_string(), "Launch".to_string()][..])
        );
        // Unknown metadata keys are ignored, absent ones default to None.
        assert!(service.metadata.full_description.is_none());
    }

    #[test]
    fn a_case_study_expands_related_services() {
        let payload = serde_json::json!({
            "objects": [{
                "id": "cs-1",
                "slug": "retail-replatform",
                "title": "Retail Replatform",
                "metadata": {
                    "client": "Acme Retail",
                    "services_used": [{
                        "id": "svc-1",
                        "slug": "e-commerce-solutions",
                        "title": "E-commerce Solutions",
                        "metadata": {}
                    }]
                }
            }]
        });

        let response: ObjectsResponse<CaseStudyMetadata> =
            serde_json::from_value(payload).unwrap();
        let study = &response.objects[0];

        let used = study.metadata.services_used.as_ref().unwrap();
        assert_eq!(used[0].slug, "e-commerce-solutions");
    }

    #[test]
    fn a_record_without_metadata_still_deserializes() {
        let payload = serde_json::json!({
            "objects": [{
                "id": "t-1",
                "slug": "quote-1",
                "title": "Quote"
            }]
        });

        let response: ObjectsResponse<TestimonialMetadata> =
            serde_json::from_value(payload).unwrap();
        assert!(response.objects[0].metadata.testimonial_text.is_none());
    }
}
