//! # TON Unified Client
//!
//! Presents two structurally different TON node client APIs - the legacy
//! single-endpoint v2 API and the block-indexed v4 API - through one
//! interface, so consumers can query account state and the current chain
//! head without knowing which backing client variant is active.
//!
//! Responses from a v4 backing pass through untouched; responses from a v2
//! backing are converted into the same canonical schema, with fields the v2
//! source cannot supply filled by named placeholders.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::{BlockIndexedApi, Capabilities, SingleStateApi, UnifiedClient};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use types::*;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// API generations a backing client can speak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ApiGeneration {
    #[serde(rename = "v2")]
    V2,
    #[serde(rename = "v4")]
    V4,
}

impl ApiGeneration {
    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ApiGeneration::V2 => "v2",
            ApiGeneration::V4 => "v4",
        }
    }

    /// Check if account reads can target a specific masterchain block
    pub fn supports_historical_reads(&self) -> bool {
        match self {
            ApiGeneration::V2 => false,
            ApiGeneration::V4 => true,
        }
    }
}

impl std::fmt::Display for ApiGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ApiGeneration {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "v2" | "legacy" => Ok(ApiGeneration::V2),
            "v4" | "block-indexed" => Ok(ApiGeneration::V4),
            _ => Err(ClientError::InvalidGeneration(s.to_string())),
        }
    }
}
