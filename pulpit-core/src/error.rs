//! Error types for the pulpit core.

use thiserror::Error;

/// Errors that can occur in pulpit operations.
#[derive(Error, Debug)]
pub enum PulpitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Provider '{0}' not found in PATH")]
    ProviderNotInstalled(String),

    #[error("Provider request timed out after {0}s")]
    ProviderTimeout(u64),

    #[error("Projection inconsistency: {0}")]
    ProjectionInconsistency(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for pulpit operations.
pub type PulpitResult<T> = Result<T, PulpitError>;
