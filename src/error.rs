//! Error types for the unified client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors reported by backing clients and surfaced unchanged by the adapter
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid API generation: {0}")]
    InvalidGeneration(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl ClientError {
    /// Create a new RPC error
    pub fn rpc<S: Into<String>>(code: i32, message: S) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    /// Create a new backend error
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a new invalid-address error
    pub fn invalid_address<S: Into<String>>(address: S) -> Self {
        Self::InvalidAddress(address.into())
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(_) => true,
            ClientError::Timeout { .. } => true,
            _ => false,
        }
    }
}
