//! Error types for the provider boundary.
//!
//! Application code uses `anyhow` throughout; provider clients return a
//! structured [`ProviderError`] so callers can name the failing provider
//! and the underlying cause.

use thiserror::Error;

/// Errors that can occur when talking to a provider API.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Sending the request failed (connection refused, timeout, DNS, ...)
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The response body could not be parsed into the expected shape
    #[error("failed to parse API response: {0}")]
    ParseError(String),

    /// The API responded with a non-success status
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },

    /// The response parsed but contained no usable text
    #[error("API response contained no text content")]
    EmptyResponse,
}

impl ProviderError {
    /// Classify a non-success HTTP status into a provider error.
    pub fn from_status(status: u16, message: String) -> Self {
        Self::ApiError { status, message }
    }

    /// Whether this error is an authentication failure (401/403).
    pub const fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::ApiError {
                status: 401 | 403,
                ..
            }
        )
    }
}
