//! Configuration for selecting and reaching a backing client

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::ApiGeneration;

/// Settings consumers use to construct the backing client.
///
/// The crate itself performs no network I/O; callers read `generation` to
/// decide which concrete client implementation to build and hand to
/// [`crate::UnifiedClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API generation the endpoint speaks
    pub generation: ApiGeneration,

    /// Endpoint base URL
    pub endpoint: String,

    /// Optional API key sent with every request
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl ClientConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with TON_CLIENT_ prefix
            .add_source(Environment::with_prefix("TON_CLIENT").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Url::parse(&self.endpoint).is_err() {
            return Err(ConfigError::Message(format!(
                "Invalid endpoint URL: {}",
                self.endpoint
            )));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "request_timeout_seconds must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            generation: ApiGeneration::V4,
            endpoint: "https://mainnet-v4.tonhubapi.com".to_string(),
            api_key: None,
            request_timeout_seconds: 30,
        }
    }
}
