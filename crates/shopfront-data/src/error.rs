//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
///
/// None of these reach the shopper directly: read paths fall back to built-in
/// data and form submissions switch to demo mode.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never got a response (connection refused, DNS, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-2xx response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Failed to encode the request body.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// Request abandoned by the caller.
    #[error("Request cancelled")]
    Cancelled,
}

impl FetchError {
    /// HTTP status, for [`FetchError::Http`].
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if the backend could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Timeout)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Http {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            FetchError::Network(e.to_string())
        }
    }
}
