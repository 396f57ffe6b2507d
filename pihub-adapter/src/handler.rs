//! Per-item-type record handling.
//!
//! Each item type the adapter understands gets one [`RecordHandler`]. The
//! pipeline looks the handler up once per item type and hands it every
//! record of that scan; records of a type without a handler are skipped.

use crate::error::RecordError;
use async_trait::async_trait;
use pihub_types::Record;
use std::collections::HashMap;
use std::sync::Arc;

/// Item type of immediate device actions.
pub const COMMAND_ITEM_TYPE: &str = "RaspberryPiCommandTargetItem";
/// Item type of device schedules.
pub const SCHEDULE_ITEM_TYPE: &str = "RaspberryPiScheduleTargetItem";

/// Transforms one record into a device call and performs it.
#[async_trait]
pub trait RecordHandler: Send + Sync {
    /// The item type tag this handler is registered under.
    fn item_type(&self) -> &str;

    /// Whether this handler processes `record`.
    fn accepts(&self, record: &Record) -> bool {
        record.item_type == self.item_type()
    }

    async fn handle(&self, record: &Record) -> Result<(), RecordError>;
}

/// Handlers keyed by item type.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn RecordHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler, replacing any previous one for the same item type.
    pub fn register(&mut self, handler: Arc<dyn RecordHandler>) {
        self.handlers.insert(handler.item_type().to_string(), handler);
    }

    pub fn get(&self, item_type: &str) -> Option<&Arc<dyn RecordHandler>> {
        self.handlers.get(item_type)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
