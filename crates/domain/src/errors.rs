//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Linkfolio
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LinkfolioError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinkfolioError {
    /// Message without the variant prefix, suitable for response bodies.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(msg)
            | Self::Conflict(msg)
            | Self::NotFound(msg)
            | Self::Upload(msg)
            | Self::Database(msg)
            | Self::Network(msg)
            | Self::Config(msg)
            | Self::Internal(msg) => msg,
        }
    }

    /// Whether the caller can fix the request and try again.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Conflict(_) | Self::NotFound(_))
    }
}

/// Result type alias for Linkfolio operations
pub type Result<T> = std::result::Result<T, LinkfolioError>;
