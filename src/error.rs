use thiserror::Error;

/// Custom error types for city-suggest
#[derive(Debug, Error)]
pub enum CitySuggestError {
    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("Invalid reference point: {0}")]
    InvalidReferencePoint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
