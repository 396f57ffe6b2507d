//! Raspberry Pi target system adapter for the data hub.
//!
//! Publishes staged target items to a Raspberry Pi device control API:
//!
//! - **Source**: [`PagedRecordSource`] walks the staged records of one item
//!   type page by page until an empty page comes back
//! - **Handlers**: [`CommandHandler`] sends immediate actions,
//!   [`ScheduleHandler`] creates or deletes schedules by intent
//! - **Pipeline**: [`PublicationPipeline`] drives the scans, isolates
//!   per-record failures and reports the outcome once
//! - **Bootstrap**: [`FeedCreationListener`] registers the feed on start-up
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use pihub_adapter::{
//!     AdapterService, CommandHandler, CompletionReporter, MetadataProvider, PagingApi,
//!     PublicationPipeline, ScheduleHandler,
//! };
//! use pihub_client::{PiClientConfig, RaspberryPiClient};
//! use pihub_types::{PublicationId, TargetSystemPublication};
//!
//! # async fn run(
//! #     hub: Arc<dyn PagingApi>,
//! #     reporter: Arc<dyn CompletionReporter>,
//! #     metadata: Arc<dyn MetadataProvider>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let pi = Arc::new(RaspberryPiClient::new(PiClientConfig::default())?);
//! let pipeline = PublicationPipeline::builder()
//!     .paging_api(hub)
//!     .completion_reporter(reporter)
//!     .metadata_provider(metadata)
//!     .handler(Arc::new(CommandHandler::new(pi.clone())))
//!     .handler(Arc::new(ScheduleHandler::new(pi)))
//!     .build()?;
//!
//! let publication =
//!     TargetSystemPublication::new(PublicationId::new(1), "RaspberryPiTargetSystem");
//! pipeline.publish(&publication).await?;
//! # Ok(())
//! # }
//! ```

mod command;
mod error;
pub mod feed;
mod handler;
mod pipeline;
mod platform;
mod schedule;
mod source;

pub use command::{CommandHandler, action_from_record};
pub use error::{AdapterError, AdapterResult, RecordError};
pub use feed::{FeedCreationListener, FeedDefinition, FeedError, FeedService};
pub use handler::{COMMAND_ITEM_TYPE, HandlerRegistry, RecordHandler, SCHEDULE_ITEM_TYPE};
pub use pipeline::{AdapterConfig, AdapterService, PublicationPipeline, PublicationPipelineBuilder};
pub use platform::{CompletionReporter, MetadataProvider, PagingApi};
pub use schedule::{ScheduleHandler, schedule_from_record};
pub use source::PagedRecordSource;
