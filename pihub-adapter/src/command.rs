//! Command items: one immediate action per record.

use crate::error::RecordError;
use crate::handler::{COMMAND_ITEM_TYPE, RecordHandler};
use async_trait::async_trait;
use pihub_client::{ActionSender, PiAction};
use pihub_types::{FieldError, Record};
use std::sync::Arc;
use tracing::debug;

const ACTION_NAME: &str = "name";
const ACTION_VALUE: &str = "value";

/// Builds the device action carried by a command record.
pub fn action_from_record(record: &Record) -> Result<PiAction, FieldError> {
    let action = PiAction::new(record.require_str(ACTION_NAME)?, record.require_str(ACTION_VALUE)?);
    debug!("{}", action);
    Ok(action)
}

/// Sends each command record to the device as an action.
pub struct CommandHandler {
    sender: Arc<dyn ActionSender>,
}

impl CommandHandler {
    pub fn new(sender: Arc<dyn ActionSender>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl RecordHandler for CommandHandler {
    fn item_type(&self) -> &str {
        COMMAND_ITEM_TYPE
    }

    async fn handle(&self, record: &Record) -> Result<(), RecordError> {
        let action = action_from_record(record)?;
        self.sender.send_action(&action).await?;
        Ok(())
    }
}
