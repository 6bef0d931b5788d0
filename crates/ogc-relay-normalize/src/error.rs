//! Normalization error types.

use ogc_relay_config::ScalarKind;
use thiserror::Error;

/// Result type for normalization.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Errors raised while building an execution request.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Neither geometry representation was supplied.
    #[error(
        "missing geometry input: pass either '{csv_flag}' (CSV coordinates) or '{document_flag}' (GeoJSON MultiPoint)"
    )]
    MissingGeometryInput {
        csv_flag: String,
        document_flag: String,
    },

    /// A CSV line is not exactly two numbers.
    #[error("malformed coordinate line '{line}': {reason}")]
    MalformedCoordinateLine { line: String, reason: String },

    /// The inline geometry is not valid JSON.
    #[error("invalid geometry document: {0}")]
    InvalidGeometryDocument(#[from] serde_json::Error),

    /// The inline geometry is JSON but not a GeoJSON MultiPoint.
    #[error("invalid geometry document: {reason}")]
    NotAMultiPoint { reason: String },

    /// A scalar value does not fit its declared type.
    #[error("invalid value '{value}' for '{name}': expected {expected}")]
    InvalidValue {
        name: String,
        value: String,
        expected: ScalarKind,
    },

    /// A required parameter without default was not supplied.
    #[error("missing required parameter '{name}'")]
    MissingInput { name: String },
}

impl NormalizeError {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        NormalizeError::MalformedCoordinateLine {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_multi_point(reason: impl Into<String>) -> Self {
        NormalizeError::NotAMultiPoint {
            reason: reason.into(),
        }
    }
}
