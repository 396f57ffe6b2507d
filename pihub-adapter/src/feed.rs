//! Bootstrap: make sure the Raspberry Pi feed exists once the data hub is up.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const FEED_NAME: &str = "RASPBERRY_PI_FEED";
pub const POOL_NAME: &str = "RASPBERRY_PI_POOL";
pub const TARGET_SYSTEM_NAME: &str = "RaspberryPiTargetSystem";

/// Errors reported by the feed service.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed definition was rejected.
    #[error("feed validation failed: {0}")]
    Validation(String),

    #[error("feed service error: {0}")]
    Service(String),
}

/// A data feed as registered with the data hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedDefinition {
    pub name: String,
    pub pool_name: String,
    pub composition_strategy: String,
    pub publication_strategy: String,
    pub pooling_strategy: String,
    pub description: String,
}

impl FeedDefinition {
    /// The event driven feed this adapter is published from.
    pub fn raspberry_pi() -> Self {
        Self {
            name: FEED_NAME.to_string(),
            pool_name: POOL_NAME.to_string(),
            composition_strategy: "MANUAL".to_string(),
            publication_strategy: "MANUAL".to_string(),
            pooling_strategy: "NAMED_POOL".to_string(),
            description: "A test feed to demonstrate event driven composition and publication"
                .to_string(),
        }
    }
}

/// Feed registry of the data hub.
#[async_trait]
pub trait FeedService: Send + Sync {
    async fn find_feed_by_name(&self, name: &str) -> Result<Option<FeedDefinition>, FeedError>;

    async fn create_feed(&self, feed: &FeedDefinition) -> Result<(), FeedError>;
}

/// Creates the Raspberry Pi feed after data hub initialization.
pub struct FeedCreationListener<S> {
    feed_service: S,
}

impl<S: FeedService> FeedCreationListener<S> {
    pub fn new(feed_service: S) -> Self {
        Self { feed_service }
    }

    pub fn feed_service(&self) -> &S {
        &self.feed_service
    }

    /// Creates the feed unless one with the same name already exists.
    ///
    /// A rejected definition is logged and swallowed so start-up carries on.
    pub async fn on_initialization_completed(&self) -> Result<(), FeedError> {
        info!("Checking for existing event driven feed");
        if self.feed_service.find_feed_by_name(FEED_NAME).await?.is_some() {
            debug!("Feed {} already exists", FEED_NAME);
            return Ok(());
        }

        debug!("Attempting to create event driven feed");
        match self.feed_service.create_feed(&FeedDefinition::raspberry_pi()).await {
            Ok(()) => {
                info!("Created feed {} on pool {}", FEED_NAME, POOL_NAME);
                Ok(())
            }
            Err(FeedError::Validation(reason)) => {
                warn!("Error creating feed: {}", reason);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
