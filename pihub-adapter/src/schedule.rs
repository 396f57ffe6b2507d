//! Schedule items: create or delete a named device schedule.

use crate::error::RecordError;
use crate::handler::{RecordHandler, SCHEDULE_ITEM_TYPE};
use async_trait::async_trait;
use pihub_client::{PiSchedule, ScheduleSender};
use pihub_types::{FieldError, PublicationIntent, Record};
use std::sync::Arc;
use tracing::debug;

const SCHEDULE_NAME: &str = "scheduleName";
const ACTION_NAME: &str = "actionName";
const ACTION_VALUE: &str = "actionValue";
const CRON_TRIGGER: &str = "cronTrigger";

/// Builds the device schedule carried by a schedule record.
pub fn schedule_from_record(record: &Record) -> Result<PiSchedule, FieldError> {
    let schedule = PiSchedule {
        name: record.require_str(SCHEDULE_NAME)?.to_string(),
        action_name: record.require_str(ACTION_NAME)?.to_string(),
        action_value: record.require_str(ACTION_VALUE)?.to_string(),
        cron_trigger: record.require_str(CRON_TRIGGER)?.to_string(),
    };
    debug!("{}", schedule);
    Ok(schedule)
}

/// Creates or deletes device schedules according to the record's intent.
pub struct ScheduleHandler {
    sender: Arc<dyn ScheduleSender>,
}

impl ScheduleHandler {
    pub fn new(sender: Arc<dyn ScheduleSender>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl RecordHandler for ScheduleHandler {
    fn item_type(&self) -> &str {
        SCHEDULE_ITEM_TYPE
    }

    async fn handle(&self, record: &Record) -> Result<(), RecordError> {
        let schedule = schedule_from_record(record)?;

        match &record.intent {
            Some(PublicationIntent::Create) => self.sender.create_schedule(&schedule).await?,
            Some(PublicationIntent::Delete) => self.sender.delete_schedule(&schedule.name).await?,
            Some(PublicationIntent::Other(intent)) => {
                return Err(RecordError::UnsupportedIntent(intent.clone()));
            }
            None => return Err(RecordError::MissingIntent),
        }
        Ok(())
    }
}
