//! Error types for the REST client.

use thiserror::Error;

/// Errors that can occur while talking to a message backend.
#[derive(Debug, Error)]
pub enum Error {
    /// Request failed before a response was received, or the response body
    /// could not be read or decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. The body text is
    /// whatever the backend sent, usually a human-readable diagnostic.
    #[error("backend returned {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// Response body text.
        body: String,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
