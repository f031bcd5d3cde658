//! Error types for the schedboard ecosystem.

use thiserror::Error;

/// Errors that can occur in schedboard operations.
#[derive(Error, Debug)]
pub enum SchedboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for schedboard operations.
pub type SchedboardResult<T> = Result<T, SchedboardError>;
