//! The publication pipeline.
//!
//! For every item type the target system expects, the pipeline pages
//! through the staged records, hands each one to the registered handler
//! and collects per-record failures. Once every scan has finished the
//! outcome goes to the [`CompletionReporter`] in a single call.
//!
//! Failure handling is asymmetric. A handler error fails only its record
//! and becomes a `PublicationError`. A paging or metadata error aborts the
//! publication and the reporter is never called.

use crate::error::{AdapterError, AdapterResult};
use crate::handler::{HandlerRegistry, RecordHandler};
use crate::platform::{CompletionReporter, MetadataProvider, PagingApi};
use crate::source::PagedRecordSource;
use async_trait::async_trait;
use futures::TryStreamExt;
use pihub_types::{PublicationError, PublicationOutcome, Record, TargetSystemPublication};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Adapter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Target system type this adapter registers as.
    pub target_system_type: String,
    /// Records requested per page.
    pub page_size: u32,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            target_system_type: "RaspberryPiTargetSystemAdapter".to_string(),
            page_size: 10,
        }
    }
}

/// A target system adapter as the data hub sees it.
#[async_trait]
pub trait AdapterService: Send + Sync {
    fn target_system_type(&self) -> &str;

    /// Delivers a publication. On `Ok` the completion report has been sent.
    async fn publish(&self, publication: &TargetSystemPublication) -> AdapterResult<()>;
}

/// Paginate, transform, send, report.
pub struct PublicationPipeline {
    config: AdapterConfig,
    paging: Arc<dyn PagingApi>,
    reporter: Arc<dyn CompletionReporter>,
    metadata: Arc<dyn MetadataProvider>,
    handlers: HandlerRegistry,
}

impl PublicationPipeline {
    pub fn builder() -> PublicationPipelineBuilder {
        PublicationPipelineBuilder::default()
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// Scans every expected item type and returns the collected failures
    /// without reporting them.
    pub async fn publish_items(
        &self,
        publication: &TargetSystemPublication,
    ) -> AdapterResult<PublicationOutcome> {
        let item_types = self
            .metadata
            .target_item_types(&publication.target_system)
            .await?;

        let mut outcome = PublicationOutcome::new();
        for item_type in &item_types {
            self.scan_item_type(publication, item_type, &mut outcome)
                .await?;
        }
        Ok(outcome)
    }

    async fn scan_item_type(
        &self,
        publication: &TargetSystemPublication,
        item_type: &str,
        outcome: &mut PublicationOutcome,
    ) -> AdapterResult<()> {
        let handler = self.handlers.get(item_type);
        if handler.is_none() {
            debug!("No handler for item type {}, records will be skipped", item_type);
        }

        let source = PagedRecordSource::new(
            self.paging.clone(),
            publication.publication_id,
            item_type,
            self.config.page_size,
        )?;
        let mut records = Box::pin(source.into_records());

        let mut processed = 0usize;
        while let Some(record) = records.try_next().await? {
            processed += 1;
            if let Some(err) = self.send_record(handler, &record).await {
                outcome.push(err);
            }
        }

        info!(
            "Publication {}: scanned {} {} record(s)",
            publication.publication_id, processed, item_type
        );
        Ok(())
    }

    /// Runs one record through its handler. Any failure is turned into a
    /// `PublicationError` here and never propagates further.
    async fn send_record(
        &self,
        handler: Option<&Arc<dyn RecordHandler>>,
        record: &Record,
    ) -> Option<PublicationError> {
        let handler = handler.filter(|h| h.accepts(record))?;

        match handler.handle(record).await {
            Ok(()) => None,
            Err(e) => {
                error!(
                    "Failed to publish target item {} ({}): {}",
                    record.canonical_id, record.item_type, e
                );
                Some(PublicationError::publication_failure(
                    record.canonical_id,
                    e.to_string(),
                ))
            }
        }
    }
}

#[async_trait]
impl AdapterService for PublicationPipeline {
    fn target_system_type(&self) -> &str {
        &self.config.target_system_type
    }

    async fn publish(&self, publication: &TargetSystemPublication) -> AdapterResult<()> {
        let outcome = self.publish_items(publication).await?;

        info!(
            "Completing publication {} with {} error(s)",
            publication.publication_id,
            outcome.error_count()
        );
        self.reporter
            .complete_publication(publication.publication_id, outcome)
            .await
    }
}

/// Builder for [`PublicationPipeline`]. Every collaborator is required.
#[derive(Default)]
pub struct PublicationPipelineBuilder {
    config: AdapterConfig,
    paging: Option<Arc<dyn PagingApi>>,
    reporter: Option<Arc<dyn CompletionReporter>>,
    metadata: Option<Arc<dyn MetadataProvider>>,
    handlers: HandlerRegistry,
}

impl PublicationPipelineBuilder {
    pub fn config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn paging_api(mut self, paging: Arc<dyn PagingApi>) -> Self {
        self.paging = Some(paging);
        self
    }

    pub fn completion_reporter(mut self, reporter: Arc<dyn CompletionReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn metadata_provider(mut self, metadata: Arc<dyn MetadataProvider>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn handler(mut self, handler: Arc<dyn RecordHandler>) -> Self {
        self.handlers.register(handler);
        self
    }

    pub fn handlers(mut self, handlers: HandlerRegistry) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn build(self) -> AdapterResult<PublicationPipeline> {
        if self.config.page_size == 0 {
            return Err(AdapterError::Config("page_size must be positive".to_string()));
        }

        Ok(PublicationPipeline {
            paging: self.paging.ok_or(AdapterError::MissingDependency("paging API"))?,
            reporter: self
                .reporter
                .ok_or(AdapterError::MissingDependency("completion reporter"))?,
            metadata: self
                .metadata
                .ok_or(AdapterError::MissingDependency("metadata provider"))?,
            handlers: self.handlers,
            config: self.config,
        })
    }
}
