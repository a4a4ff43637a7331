//! Error taxonomy for remote client operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching from a [`MealClient`](super::MealClient).
///
/// An id that matches nothing is not an error; it is `Ok(None)` from
/// `fetch_detail`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or connectivity failure (DNS, refused connection, timeout)
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A fixture document could not be read
    #[error("Failed to read fixture '{path}': {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Server answered outside the 2xx range
    #[error("Server responded with status {status}")]
    HttpStatus { status: u16 },

    /// Payload did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// `fetch_detail` was called with an empty id
    #[error("Meal id must not be empty")]
    EmptyId,

    /// A request URL could not be built from the configured base URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    /// Stable kind string for logs and diagnostics.
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Transport(_) | ClientError::Fixture { .. } => "transport_error",
            ClientError::HttpStatus { .. } => "http_status_error",
            ClientError::Decode(_) => "decode_error",
            ClientError::EmptyId | ClientError::InvalidUrl { .. } => "invalid_request",
        }
    }
}
