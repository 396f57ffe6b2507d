//! Device client error types.

use thiserror::Error;

/// Result type for device client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur talking to the device.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("device returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns the HTTP status if the device answered with an error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
