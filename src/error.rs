use crate::api::ApiError;

use std::result::Result as StdResult;

use thiserror::Error;

/// Application-level errors for the desktop client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading or saving error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
    },

    /// Backend client could not be constructed.
    #[error("Backend client error: {source}")]
    Api {
        /// The underlying client error.
        #[source]
        source: ApiError,
    },

    /// The async runtime or window failed to start.
    #[error("Startup failed: {reason}")]
    Startup {
        /// Human-readable reason for failure.
        reason: String,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl From<ApiError> for AppError {
    fn from(source: ApiError) -> Self {
        AppError::Api { source }
    }
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        AppError::IoError { source }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
