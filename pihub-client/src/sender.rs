//! Capability traits over the device API.

use crate::error::ClientResult;
use crate::model::{PiAction, PiSchedule, PiStatus};
use async_trait::async_trait;

/// Reads the device's current status.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn get_status(&self) -> ClientResult<PiStatus>;
}

/// Triggers an immediate action on the device.
#[async_trait]
pub trait ActionSender: Send + Sync {
    async fn send_action(&self, action: &PiAction) -> ClientResult<()>;
}

/// Manages the device's recurring schedules.
#[async_trait]
pub trait ScheduleSender: Send + Sync {
    /// Creates the schedule, replacing one with the same name.
    async fn create_schedule(&self, schedule: &PiSchedule) -> ClientResult<()>;

    /// Removes a schedule by name. Removing an unknown schedule succeeds.
    async fn delete_schedule(&self, schedule_name: &str) -> ClientResult<()>;
}
