/// Error types for the HidroCalc API client
use thiserror::Error;

/// Message used when an error body carries neither `message`, `detail` nor `error`.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Main error type for backend requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// The body was not valid JSON or did not match the expected shape
    #[error("Invalid response: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status of a server-reported failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
