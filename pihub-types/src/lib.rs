//! Core type definitions for the Raspberry Pi data hub adapter.
//!
//! This crate defines the platform-facing data model shared by the client,
//! the adapter and the CLI:
//! - Canonical item and publication identifiers
//! - [`Record`], a staged target item with generically-typed named fields
//! - [`PageRequest`] for walking a paged collection
//! - [`PublicationError`] and [`PublicationOutcome`], the per-item failure
//!   report handed back to the platform when a publication completes
//!
//! Nothing here performs I/O.

mod ids;
mod page;
mod publication;
mod record;

pub use ids::{CanonicalItemId, PublicationId};
pub use page::PageRequest;
pub use publication::{PublicationError, PublicationOutcome, TargetSystemPublication};
pub use record::{FieldError, PublicationIntent, Record};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid page request: {0}")]
    InvalidPageRequest(String),
}
