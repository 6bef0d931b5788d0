//! Configuration error types.

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading parameters for an adapter.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a params file or a staged input file.
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    /// Params file extension is neither `.json` nor `.toml`.
    #[error("unsupported params file '{path}' (expected a .json or .toml file)")]
    UnsupportedFormat { path: String },

    /// Failed to parse a JSON params file.
    #[error("failed to parse JSON params file: {0}")]
    ParseJson(#[from] serde_json::Error),

    /// Failed to parse a TOML params file.
    #[error("failed to parse TOML params file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Params file root is not a table/object.
    #[error("params file '{path}' must contain a top-level object")]
    NotAnObject { path: String },

    /// Params file names a parameter the adapter does not declare.
    #[error("unknown parameter '{name}' for adapter '{adapter}'")]
    UnknownParameter { name: String, adapter: String },

    /// Adapter name not present in the catalog.
    #[error("adapter '{0}' not found")]
    AdapterNotFound(String),
}
