//! Publication results reported back to the platform.

use crate::{CanonicalItemId, PublicationId};
use serde::{Deserialize, Serialize};

/// One target system publication the adapter is asked to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSystemPublication {
    pub publication_id: PublicationId,
    /// Name of the target system whose item metadata drives the scan.
    pub target_system: String,
}

impl TargetSystemPublication {
    pub fn new(publication_id: PublicationId, target_system: impl Into<String>) -> Self {
        Self {
            publication_id,
            target_system: target_system.into(),
        }
    }
}

/// A failure to deliver one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationError {
    pub canonical_item_id: CanonicalItemId,
    pub code: String,
    pub message: String,
}

impl PublicationError {
    /// Error code the platform expects for a failed delivery.
    pub const PUBLICATION_FAILURE: &'static str = "publication failure";

    pub fn publication_failure(
        canonical_item_id: CanonicalItemId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            canonical_item_id,
            code: Self::PUBLICATION_FAILURE.to_string(),
            message: message.into(),
        }
    }
}

/// Aggregate result of one publication. No errors means full success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationOutcome {
    pub export_errors: Vec<PublicationError>,
}

impl PublicationOutcome {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: PublicationError) {
        self.export_errors.push(error);
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.export_errors.is_empty()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.export_errors.len()
    }

    pub fn errors(&self) -> &[PublicationError] {
        &self.export_errors
    }
}
