//! Domain layer error types
//!
//! The filter itself never fails. These errors come from the collaborators
//! that feed it (package sources, allow-list sources).

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// Package source could not be queried
    #[error("Package source error: {0}")]
    SourceError(String),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    IoError(String),

    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::ParseError(err.to_string())
    }
}
