use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Startup failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AppError> for ServerError {
    fn from(err: AppError) -> Self {
        match err.code {
            ErrorCode::ConfigError => ServerError::Config(err.message),
            _ => ServerError::Database(err.message),
        }
    }
}

/// Result type for startup operations
pub type Result<T> = std::result::Result<T, ServerError>;
