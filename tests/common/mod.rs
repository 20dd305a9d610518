//! Shared setup for router-level integration tests.

#![allow(dead_code)]

use atelier::config::{Config, ContentConfig, ObservabilityConfig, ServerConfig};
use atelier_notification::EmailConfig;

/// Test configuration pointing at endpoints nothing listens on: content
/// fetches fail fast and pages exercise their degraded paths, SMTP sends
/// fail at connect.
pub fn test_config(smtp_host: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        content: ContentConfig {
            api_url: "http://127.0.0.1:9/v3".to_string(),
            bucket_slug: "test-bucket".to_string(),
            read_key: String::new(),
        },
        email: EmailConfig {
            smtp_host: smtp_host.to_string(),
            smtp_port: 1025,
            ..EmailConfig::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(smtp_host: &str) -> axum::Router {
    atelier::create_app(test_config(smtp_host)).expect("test app should build")
}
