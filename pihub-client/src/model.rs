//! Wire model of the device API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immediate action, e.g. `{"name": "led", "value": "on"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiAction {
    pub name: String,
    pub value: String,
}

impl PiAction {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for PiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PiAction[name={}, value={}]", self.name, self.value)
    }
}

/// A named action the device runs on a cron trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiSchedule {
    pub name: String,
    pub action_name: String,
    pub action_value: String,
    pub cron_trigger: String,
}

impl fmt::Display for PiSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PiSchedule[name={}, action={}={}, trigger={}]",
            self.name, self.action_name, self.action_value, self.cron_trigger
        )
    }
}

/// Response of `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime_secs: Option<u64>,
}
