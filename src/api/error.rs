use thiserror::Error;

/// Failures talking to the analysis backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The configured base URL or a derived endpoint is not a valid URL.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response (connect, timeout, reset).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("HTTP {code}: {message}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Backend `error` field, or the canonical reason.
        message: String,
    },

    /// A well-formed body carried an `error` field.
    #[error("Backend error: {0}")]
    Backend(String),

    /// The body could not be decoded into the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Local file access failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Io(e.to_string())
    }
}
