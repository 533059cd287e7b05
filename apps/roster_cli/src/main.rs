use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use client_core::{RosterApi, RosterClient};
use roster_page::{initialize, Document};
use shared::domain::{WorkerId, WorkerSummary};
use tracing_subscriber::EnvFilter;

mod config;
mod console;

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Operate the worker roster of a scheduling backend")]
struct Cli {
    /// Overrides the server URL from settings and environment.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = config::DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a full worker order.
    Reorder {
        #[arg(required = true)]
        worker_ids: Vec<i64>,
    },
    /// Request an off-duty change and print the state the backend stored.
    #[command(group(ArgGroup::new("state").required(true).args(["off", "on"])))]
    Toggle {
        worker_id: i64,
        #[arg(long)]
        off: bool,
        #[arg(long)]
        on: bool,
    },
    /// Drive the roster page interactively.
    Console {
        /// Worker row as ID or ID:off, in display order.
        #[arg(long = "worker", value_parser = console::parse_worker_spec)]
        workers: Vec<WorkerSummary>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let mut settings = config::load_settings(&cli.config);
    if let Some(server_url) = cli.server_url {
        settings.server_url = server_url;
    }
    let client = RosterClient::with_endpoints(&settings.server_url, settings.endpoints())
        .with_context(|| format!("failed to set up client for {}", settings.server_url))?;

    match cli.command {
        Command::Reorder { worker_ids } => {
            let order: Vec<WorkerId> = worker_ids.into_iter().map(WorkerId).collect();
            client
                .update_worker_order(&order)
                .await
                .context("order update failed")?;
            println!("saved order of {} workers", order.len());
        }
        Command::Toggle { worker_id, off, on } => {
            let desired_is_off = off && !on;
            let is_off = client
                .toggle_off_worker(WorkerId(worker_id), desired_is_off)
                .await
                .with_context(|| format!("off-duty update for worker {worker_id} failed"))?;
            println!(
                "worker {worker_id} is now {}",
                if is_off { "off duty" } else { "on duty" }
            );
        }
        Command::Console { workers } => {
            let document = if workers.is_empty() {
                Document::new()
            } else {
                Document::render(&workers, settings.locale)?
            };
            let locale = settings.locale;
            tokio::task::spawn_blocking(move || {
                let page = initialize(document, Arc::new(client), locale, console::ConsoleAlerter);
                console::run(page)
            })
            .await
            .context("console host panicked")??;
        }
    }

    Ok(())
}
