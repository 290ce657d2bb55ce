//! Error types for the profile client crate.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ProfileClientError>;

/// Errors produced while talking to the remote profile service.
#[derive(Debug, Error)]
pub enum ProfileClientError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success response from the remote service
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication error (malformed or rejected token)
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl ProfileClientError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// HTTP status if this is an API error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the remote service rejected the caller's credentials.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Api { status, .. } => matches!(status, 401 | 403),
            Self::Auth(_) => true,
            _ => false,
        }
    }

    /// True when the requested resource does not exist upstream.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}
