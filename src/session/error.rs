use crate::api::ApiError;

use thiserror::Error;

/// Everything that can end an upload-and-track attempt.
///
/// All variants are handled inside the session and shown to the user; none
/// escape as a panic or an unhandled failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Bad file type or size, rejected before any request is sent.
    #[error("{0}")]
    Validation(String),

    /// Network failure or non-success HTTP status.
    #[error("Network error: {0}")]
    Transport(String),

    /// A well-formed response carrying an `error` field, or a job that
    /// finished with `status: "error"`.
    #[error("{0}")]
    Backend(String),

    /// An expected field was missing or the body did not decode.
    #[error("Unexpected response from backend: {0}")]
    MalformedResponse(String),
}

impl From<ApiError> for SessionError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Transport(message)
            | ApiError::InvalidUrl(message)
            | ApiError::Io(message) => SessionError::Transport(message),
            ApiError::Status { code, message } => {
                SessionError::Transport(format!("HTTP {}: {}", code, message))
            }
            ApiError::Backend(message) => SessionError::Backend(message),
            ApiError::Decode(message) => SessionError::MalformedResponse(message),
        }
    }
}
