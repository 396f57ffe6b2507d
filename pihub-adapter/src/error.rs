//! Error types for the adapter.
//!
//! [`AdapterError`] aborts a whole publication. [`RecordError`] is confined
//! to one record and ends up as a `PublicationError` in the outcome.

use pihub_client::ClientError;
use pihub_types::FieldError;
use thiserror::Error;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors that abort a publication.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The paging API could not serve a page.
    #[error("paging error: {0}")]
    Paging(String),

    /// Target item metadata could not be resolved.
    #[error("metadata error: {0}")]
    Metadata(String),

    /// The completion report could not be delivered.
    #[error("completion report failed: {0}")]
    Reporter(String),

    /// A required collaborator was not supplied to the builder.
    #[error("missing dependency: {0}")]
    MissingDependency(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Errors that fail a single record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("send failed: {0}")]
    Send(#[from] ClientError),

    #[error("unsupported publication intent: {0}")]
    UnsupportedIntent(String),

    #[error("record carries no publication intent")]
    MissingIntent,
}
