//! Raspberry Pi data hub adapter CLI
//!
//! Publishes a staged publication to a Raspberry Pi, or probes its status.
//!
//! Usage:
//!   pihub status
//!   pihub publish --staging staged.json --report outcome.json

use std::{path::PathBuf, sync::Arc};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pihub_adapter::{AdapterService, CommandHandler, PublicationPipeline, ScheduleHandler};
use pihub_cli::{CliConfig, JsonStagingStore};
use pihub_client::{RaspberryPiClient, StatusProbe};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pihub")]
#[command(about = "Publish data hub records to a Raspberry Pi")]
struct Args {
    /// Path to the JSON config file
    #[arg(short, long, default_value = "pihub.json")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the device status
    Status,

    /// Publish a staged publication to the device
    Publish {
        /// Staging document with the records to publish
        #[arg(short, long)]
        staging: PathBuf,

        /// Where to write the outcome (stdout if omitted)
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = CliConfig::load(&args.config)?;
    let pi = Arc::new(RaspberryPiClient::new(config.pi.clone()).context("Invalid device config")?);

    match args.command {
        Command::Status => {
            let status = pi.get_status().await.context("Status probe failed")?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Command::Publish { staging, report } => {
            let store = Arc::new(JsonStagingStore::open(&staging)?);
            let pipeline = PublicationPipeline::builder()
                .config(config.adapter)
                .paging_api(store.clone())
                .completion_reporter(store.clone())
                .metadata_provider(store.clone())
                .handler(Arc::new(CommandHandler::new(pi.clone())))
                .handler(Arc::new(ScheduleHandler::new(pi)))
                .build()?;

            let publication = store.publication();
            info!(
                "Publishing {} via {} to {}",
                publication.publication_id,
                pipeline.target_system_type(),
                config.pi.base_url
            );
            pipeline
                .publish(&publication)
                .await
                .context("Publication aborted")?;

            let outcome = store.take_outcome().unwrap_or_default();
            let json = serde_json::to_string_pretty(&outcome)?;
            match report {
                Some(path) => std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write report {}", path.display()))?,
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
