//! Error types for forgebox

use thiserror::Error;

/// Result type alias using forgebox Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing a sandbox configuration.
///
/// Deriving the configuration itself never fails: host paths that are unset
/// or absent simply drop their mount from the output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
