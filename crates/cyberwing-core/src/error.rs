use thiserror::Error;

/// Top-level error type for Cyberwing.
///
/// Subsystem crates define their own error types and convert from this one
/// where they touch configuration or the filesystem, so the `?` operator
/// works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CyberwingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for CyberwingError {
    fn from(err: toml::de::Error) -> Self {
        CyberwingError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CyberwingError {
    fn from(err: toml::ser::Error) -> Self {
        CyberwingError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CyberwingError {
    fn from(err: serde_json::Error) -> Self {
        CyberwingError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Cyberwing operations.
pub type Result<T> = std::result::Result<T, CyberwingError>;
