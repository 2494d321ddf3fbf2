//! Error types for taskline.
//!
//! The parser itself never fails; these errors come from configuration,
//! catalog files, output serialization and task backends.

use thiserror::Error;

/// Errors produced outside the (total) task parser.
#[derive(Debug, Error)]
pub enum TasklineError {
    /// Configuration could not be located, read or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or stream failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Parse(#[from] serde_json::Error),

    /// YAML (catalog or config) could not be decoded.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A task backend rejected an operation.
    #[error("backend error: {0}")]
    Backend(String),

    /// User input that cannot be acted on (e.g. an unknown shell name).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
