use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use atelier_notification::EmailConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Base URL of the content API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bucket holding this site's objects.
    #[serde(default)]
    pub bucket_slug: String,
    /// Read key; blank for public buckets.
    #[serde(default)]
    pub read_key: String,
}

fn default_api_url() -> String {
    "https://api.cosmicjs.com/v3".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ATELIER__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("content.api_url", default_api_url())?
            .set_default("content.bucket_slug", "")?
            .set_default("content.read_key", "")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults and env cover the rest.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ATELIER")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the provider's conventional environment variables.
        if let Ok(bucket_slug) = env::var("COSMIC_BUCKET_SLUG") {
            builder = builder.set_override("content.bucket_slug", bucket_slug)?;
        }
        if let Ok(read_key) = env::var("COSMIC_READ_KEY") {
            builder = builder.set_override("content.read_key", read_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.content.api_url.is_empty() {
            return Err("Content api_url must not be empty".to_string());
        }
        if self.content.bucket_slug.is_empty() {
            return Err(
                "Content bucket_slug must be set (ATELIER__CONTENT__BUCKET_SLUG or config file)"
                    .to_string(),
            );
        }
        if self.email.is_configured() && self.email.from_address.is_empty() {
            return Err("Email from_address must be set when smtp_host is configured".to_string());
        }
        if self.email.contact_address.is_empty() {
            return Err("Email contact_address must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            content: ContentConfig {
                api_url: default_api_url(),
                bucket_slug: "test-bucket".to_string(),
                read_key: String::new(),
            },
            email: EmailConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_load_defaults() {
        let config = Config::load(None).expect("defaults should load");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        // Mail stays disabled until a host is configured.
        assert!(!config.email.is_configured());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_bucket() {
        let mut config = valid_config();
        config.content.bucket_slug.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_configured_email_needs_from_address() {
        let mut config = valid_config();
        config.email.smtp_host = "smtp.example.com".to_string();
        config.email.from_address.clear();
        assert!(config.validate().is_err());
    }
}
