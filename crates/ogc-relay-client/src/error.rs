//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-200 status, or could not be reached.
    #[error("tool failure: {detail}")]
    TransportFailure {
        /// HTTP status code, `None` for network-level failures.
        status: Option<u16>,
        detail: String,
    },

    /// The service answered 200 but rejected the request in its body.
    #[error("tool failure: server responded with: {reason}")]
    SemanticFailure {
        reason: String,
        payload: serde_json::Value,
    },

    /// Failed to build the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output file failed.
    #[error("failed to write output file '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of a transport failure, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::TransportFailure { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether the service itself reported the failure.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            ClientError::TransportFailure { .. } | ClientError::SemanticFailure { .. }
        )
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
