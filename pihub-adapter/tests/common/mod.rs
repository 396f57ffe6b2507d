#![allow(dead_code)]

use async_trait::async_trait;
use pihub_adapter::{
    AdapterError, AdapterResult, COMMAND_ITEM_TYPE, CommandHandler, CompletionReporter,
    MetadataProvider, PagingApi, PublicationPipeline, SCHEDULE_ITEM_TYPE, ScheduleHandler,
};
use pihub_client::{ActionSender, ClientError, ClientResult, PiAction, PiSchedule, ScheduleSender};
use pihub_types::{
    CanonicalItemId, PageRequest, PublicationId, PublicationIntent, PublicationOutcome, Record,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub const TARGET_SYSTEM: &str = "RaspberryPiTargetSystem";

// ── Data hub fakes ───────────────────────────────────────────────

/// Serves staged records from memory and logs every page request.
#[derive(Default)]
pub struct InMemoryHub {
    records: Mutex<HashMap<String, Vec<Record>>>,
    item_types: Mutex<Vec<String>>,
    fetches: Mutex<Vec<(String, PageRequest)>>,
    fail_on: Mutex<Option<(String, u32)>>,
    reports: Mutex<Vec<(PublicationId, PublicationOutcome)>>,
}

impl InMemoryHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn stage(&self, records: Vec<Record>) {
        let mut staged = self.records.lock().unwrap();
        let mut types = self.item_types.lock().unwrap();
        for record in records {
            if !types.contains(&record.item_type) {
                types.push(record.item_type.clone());
            }
            staged.entry(record.item_type.clone()).or_default().push(record);
        }
    }

    pub fn expect_item_types(&self, item_types: &[&str]) {
        *self.item_types.lock().unwrap() = item_types.iter().map(|s| s.to_string()).collect();
    }

    pub fn fail_on_page(&self, item_type: &str, index: u32) {
        *self.fail_on.lock().unwrap() = Some((item_type.to_string(), index));
    }

    pub fn fetches(&self) -> Vec<(String, PageRequest)> {
        self.fetches.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }

    pub fn reports(&self) -> Vec<(PublicationId, PublicationOutcome)> {
        self.reports.lock().unwrap().clone()
    }
}

#[async_trait]
impl PagingApi for InMemoryHub {
    async fn find_by_publication(
        &self,
        _publication_id: PublicationId,
        item_type: &str,
        page: PageRequest,
    ) -> AdapterResult<Vec<Record>> {
        self.fetches
            .lock()
            .unwrap()
            .push((item_type.to_string(), page));

        if let Some((fail_type, fail_index)) = self.fail_on.lock().unwrap().as_ref() {
            if fail_type == item_type && *fail_index == page.index() {
                return Err(AdapterError::Paging(format!(
                    "page {} of {} unavailable",
                    page.index(),
                    item_type
                )));
            }
        }

        let staged = self.records.lock().unwrap();
        let all = staged.get(item_type).map(Vec::as_slice).unwrap_or(&[]);
        let start = (page.offset() as usize).min(all.len());
        let end = (start + page.size() as usize).min(all.len());
        Ok(all[start..end].to_vec())
    }
}

#[async_trait]
impl MetadataProvider for InMemoryHub {
    async fn target_item_types(&self, _target_system: &str) -> AdapterResult<Vec<String>> {
        Ok(self.item_types.lock().unwrap().clone())
    }
}

#[async_trait]
impl CompletionReporter for InMemoryHub {
    async fn complete_publication(
        &self,
        publication_id: PublicationId,
        outcome: PublicationOutcome,
    ) -> AdapterResult<()> {
        self.reports.lock().unwrap().push((publication_id, outcome));
        Ok(())
    }
}

// ── Device fake ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    Action(PiAction),
    CreateSchedule(PiSchedule),
    DeleteSchedule(String),
}

/// Records device calls; fails any call whose name is in `failing`.
#[derive(Default)]
pub struct RecordingPi {
    calls: Mutex<Vec<DeviceCall>>,
    failing: Mutex<HashSet<String>>,
}

impl RecordingPi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_for(&self, name: &str) {
        self.failing.lock().unwrap().insert(name.to_string());
    }

    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &str, call: DeviceCall) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(name) {
            return Err(ClientError::Api {
                status: 503,
                body: format!("{name} rejected"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ActionSender for RecordingPi {
    async fn send_action(&self, action: &PiAction) -> ClientResult<()> {
        self.record(&action.name, DeviceCall::Action(action.clone()))
    }
}

#[async_trait]
impl ScheduleSender for RecordingPi {
    async fn create_schedule(&self, schedule: &PiSchedule) -> ClientResult<()> {
        self.record(&schedule.name, DeviceCall::CreateSchedule(schedule.clone()))
    }

    async fn delete_schedule(&self, schedule_name: &str) -> ClientResult<()> {
        self.record(schedule_name, DeviceCall::DeleteSchedule(schedule_name.to_string()))
    }
}

// ── Builders ─────────────────────────────────────────────────────

pub fn command(id: u64, name: &str, value: &str) -> Record {
    Record::new(COMMAND_ITEM_TYPE, CanonicalItemId::new(id))
        .with_field("name", name)
        .with_field("value", value)
}

pub fn schedule(id: u64, name: &str, intent: PublicationIntent) -> Record {
    Record::new(SCHEDULE_ITEM_TYPE, CanonicalItemId::new(id))
        .with_intent(intent)
        .with_field("scheduleName", name)
        .with_field("actionName", "lamp")
        .with_field("actionValue", "on")
        .with_field("cronTrigger", "0 30 6 * * ?")
}

pub fn commands(count: u64) -> Vec<Record> {
    (1..=count)
        .map(|i| command(i, &format!("action-{i}"), "on"))
        .collect()
}

pub fn pipeline(hub: &Arc<InMemoryHub>, pi: &Arc<RecordingPi>) -> PublicationPipeline {
    PublicationPipeline::builder()
        .paging_api(hub.clone())
        .completion_reporter(hub.clone())
        .metadata_provider(hub.clone())
        .handler(Arc::new(CommandHandler::new(pi.clone())))
        .handler(Arc::new(ScheduleHandler::new(pi.clone())))
        .build()
        .unwrap()
}
