//! HTTP client error types.

use mickeys_commerce::FormError;
use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}

/// Why a form did not go through.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The form failed validation and was never sent.
    #[error(transparent)]
    Invalid(#[from] FormError),

    /// The endpoint answered but did not accept the submission.
    #[error("The submission was not accepted. Please try again.")]
    Rejected,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
