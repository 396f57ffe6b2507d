//! Data hub collaborators the adapter is driven by.

use crate::error::AdapterResult;
use async_trait::async_trait;
use pihub_types::{PageRequest, PublicationId, PublicationOutcome, Record};

/// Serves the records staged for a publication, one page at a time.
///
/// An empty page marks the end of the collection. Failures must come back
/// as `Err`, never as an empty page.
#[async_trait]
pub trait PagingApi: Send + Sync {
    async fn find_by_publication(
        &self,
        publication_id: PublicationId,
        item_type: &str,
        page: PageRequest,
    ) -> AdapterResult<Vec<Record>>;
}

/// Receives the outcome once a publication has been fully scanned.
#[async_trait]
pub trait CompletionReporter: Send + Sync {
    async fn complete_publication(
        &self,
        publication_id: PublicationId,
        outcome: PublicationOutcome,
    ) -> AdapterResult<()>;
}

/// Knows which item types a target system expects.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn target_item_types(&self, target_system: &str) -> AdapterResult<Vec<String>>;
}
