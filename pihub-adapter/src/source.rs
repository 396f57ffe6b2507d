//! Forward-only scan over a paged collection.

use crate::error::{AdapterError, AdapterResult};
use crate::platform::PagingApi;
use futures::stream::{self, Stream, TryStreamExt};
use pihub_types::{PageRequest, PublicationId, Record};
use std::sync::Arc;
use tracing::debug;

/// Walks the pages of one item type within a publication.
///
/// Pages are fetched strictly in order starting at index 0. The scan ends
/// at the first empty page; the collaborator offers no total count, so a
/// non-terminal empty page would end it early as well.
pub struct PagedRecordSource {
    paging: Arc<dyn PagingApi>,
    publication_id: PublicationId,
    item_type: String,
    next: PageRequest,
    exhausted: bool,
    pages_fetched: u32,
}

impl PagedRecordSource {
    pub fn new(
        paging: Arc<dyn PagingApi>,
        publication_id: PublicationId,
        item_type: impl Into<String>,
        page_size: u32,
    ) -> AdapterResult<Self> {
        let first = PageRequest::first(page_size).map_err(|e| AdapterError::Config(e.to_string()))?;
        Ok(Self {
            paging,
            publication_id,
            item_type: item_type.into(),
            next: first,
            exhausted: false,
            pages_fetched: 0,
        })
    }

    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// Number of page requests issued so far, including the terminating one.
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Fetches the next page. Returns `None` once an empty page has been seen.
    pub async fn next_page(&mut self) -> AdapterResult<Option<Vec<Record>>> {
        if self.exhausted {
            return Ok(None);
        }

        let request = self.next;
        let records = self
            .paging
            .find_by_publication(self.publication_id, &self.item_type, request)
            .await?;
        self.pages_fetched += 1;

        if records.is_empty() {
            debug!(
                "End of {} after {} page(s)",
                self.item_type, self.pages_fetched
            );
            self.exhausted = true;
            return Ok(None);
        }

        debug!(
            "Fetched page {} of {} ({} records)",
            request.index(),
            self.item_type,
            records.len()
        );
        self.next = request
            .next()
            .map_err(|e| AdapterError::Paging(e.to_string()))?;
        Ok(Some(records))
    }

    /// Flattens the scan into a lazy record stream.
    ///
    /// A page is requested only after every record of the previous page has
    /// been pulled. Fetch failures surface as an `Err` item.
    pub fn into_records(self) -> impl Stream<Item = AdapterResult<Record>> + Send {
        stream::try_unfold(self, |mut source| async move {
            let page = source.next_page().await?;
            Ok::<_, AdapterError>(page.map(|records| {
                (
                    stream::iter(records.into_iter().map(Ok::<Record, AdapterError>)),
                    source,
                )
            }))
        })
        .try_flatten()
    }
}
