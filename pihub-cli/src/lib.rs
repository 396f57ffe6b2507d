//! Config loading and the file-backed staging store behind the `pihub` binary.

use anyhow::{Context, Result};
use async_trait::async_trait;
use pihub_adapter::{
    AdapterConfig, AdapterError, AdapterResult, CompletionReporter, MetadataProvider, PagingApi,
};
use pihub_client::PiClientConfig;
use pihub_types::{PageRequest, PublicationId, PublicationOutcome, Record, TargetSystemPublication};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// Contents of `pihub.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub pi: PiClientConfig,
    pub adapter: AdapterConfig,
}

impl CliConfig {
    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}

/// A publication staged as a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagingDocument {
    pub publication_id: PublicationId,
    pub target_system: String,
    /// Item types the target system expects, in scan order.
    pub item_types: Vec<String>,
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Serves a [`StagingDocument`] to the pipeline and keeps the outcome.
pub struct JsonStagingStore {
    document: StagingDocument,
    outcome: Mutex<Option<PublicationOutcome>>,
}

impl JsonStagingStore {
    pub fn new(document: StagingDocument) -> Self {
        Self {
            document,
            outcome: Mutex::new(None),
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read staging file {}", path.display()))?;
        let document = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse staging file {}", path.display()))?;
        Ok(Self::new(document))
    }

    pub fn publication(&self) -> TargetSystemPublication {
        TargetSystemPublication::new(
            self.document.publication_id,
            self.document.target_system.clone(),
        )
    }

    /// The reported outcome, once the publication completed.
    pub fn take_outcome(&self) -> Option<PublicationOutcome> {
        self.outcome.lock().ok().and_then(|mut o| o.take())
    }
}

#[async_trait]
impl PagingApi for JsonStagingStore {
    async fn find_by_publication(
        &self,
        publication_id: PublicationId,
        item_type: &str,
        page: PageRequest,
    ) -> AdapterResult<Vec<Record>> {
        if publication_id != self.document.publication_id {
            return Err(AdapterError::Paging(format!(
                "unknown publication {publication_id}"
            )));
        }

        let records = self
            .document
            .records
            .iter()
            .filter(|r| r.item_type == item_type)
            .skip(page.offset() as usize)
            .take(page.size() as usize)
            .cloned()
            .collect();
        Ok(records)
    }
}

#[async_trait]
impl MetadataProvider for JsonStagingStore {
    async fn target_item_types(&self, target_system: &str) -> AdapterResult<Vec<String>> {
        if target_system != self.document.target_system {
            return Err(AdapterError::Metadata(format!(
                "unknown target system {target_system}"
            )));
        }
        Ok(self.document.item_types.clone())
    }
}

#[async_trait]
impl CompletionReporter for JsonStagingStore {
    async fn complete_publication(
        &self,
        publication_id: PublicationId,
        outcome: PublicationOutcome,
    ) -> AdapterResult<()> {
        info!(
            "Publication {} complete: {} error(s)",
            publication_id,
            outcome.error_count()
        );
        let mut slot = self
            .outcome
            .lock()
            .map_err(|_| AdapterError::Reporter("outcome lock poisoned".to_string()))?;
        *slot = Some(outcome);
        Ok(())
    }
}
