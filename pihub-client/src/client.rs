//! HTTP implementation of the device capabilities.

use crate::error::{ClientError, ClientResult};
use crate::model::{PiAction, PiSchedule, PiStatus};
use crate::sender::{ActionSender, ScheduleSender, StatusProbe};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for the device API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PiClientConfig {
    /// Base URL of the device API (e.g. `http://raspberrypi.local:8080`).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://raspberrypi.local:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Device client over `reqwest`. Cheap to clone; clones share a connection pool.
#[derive(Debug, Clone)]
pub struct RaspberryPiClient {
    base_url: String,
    client: Client,
}

impl RaspberryPiClient {
    /// Creates a client. The base URL must be an `http` or `https` URL.
    pub fn new(config: PiClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base_url must start with http:// or https://, got `{}`",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Maps a non-2xx response to [`ClientError::Api`].
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl StatusProbe for RaspberryPiClient {
    async fn get_status(&self) -> ClientResult<PiStatus> {
        debug!("Fetching device status");

        let response = self.client.get(self.url("/status")).send().await?;
        let status = check(response).await?.json().await?;
        Ok(status)
    }
}

#[async_trait]
impl ActionSender for RaspberryPiClient {
    async fn send_action(&self, action: &PiAction) -> ClientResult<()> {
        debug!("Sending {}", action);

        let response = self
            .client
            .post(self.url("/action"))
            .json(action)
            .send()
            .await?;
        check(response).await?;

        info!("Sent action: {}", action.name);
        Ok(())
    }
}

#[async_trait]
impl ScheduleSender for RaspberryPiClient {
    async fn create_schedule(&self, schedule: &PiSchedule) -> ClientResult<()> {
        debug!("Creating {}", schedule);

        let response = self
            .client
            .post(self.url("/schedules"))
            .json(schedule)
            .send()
            .await?;
        check(response).await?;

        info!("Created schedule: {}", schedule.name);
        Ok(())
    }

    async fn delete_schedule(&self, schedule_name: &str) -> ClientResult<()> {
        debug!("Deleting schedule: {}", schedule_name);

        let response = self
            .client
            .delete(self.url(&format!(
                "/schedules/{}",
                urlencoding::encode(schedule_name)
            )))
            .send()
            .await?;

        // Already gone.
        if response.status().as_u16() == 404 {
            debug!("Schedule {} not present on device", schedule_name);
            return Ok(());
        }
        check(response).await?;

        info!("Deleted schedule: {}", schedule_name);
        Ok(())
    }
}
