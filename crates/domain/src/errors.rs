//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for WorkPulse
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum WorkPulseError {
    /// Unknown provider type or invalid configuration. Never retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream provider answered with a non-success status.
    #[error("Provider error: HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    /// Upstream response did not match the expected shape.
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Cache store unavailable. The cache layer absorbs this variant.
    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WorkPulseError {
    /// Build a provider error from an HTTP status and raw response body.
    pub fn provider(status: u16, body: impl Into<String>) -> Self {
        Self::Provider { status, body: body.into() }
    }

    /// Stable label for logs and command outcomes.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Provider { .. } => "provider",
            Self::Schema(_) => "schema",
            Self::Network(_) => "network",
            Self::Cache(_) => "cache",
            Self::Database(_) => "database",
            Self::Auth(_) => "auth",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for WorkPulse operations
pub type Result<T> = std::result::Result<T, WorkPulseError>;
