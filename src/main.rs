//! zpool-exporter
//!
//! An HTTP exporter for ZFS pool metrics, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                ZPOOL EXPORTER                 │
//!                      │                                               │
//!   GET /metrics       │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!   ──────────────────▶│  │  http   │───▶│ metrics │───▶│collector │──┼──▶ zpool_prometheus
//!                      │  │ server  │    │ handler │    │  spawn   │  │    (child process)
//!                      │  └─────────┘    └─────────┘    └────┬─────┘  │
//!                      │                                     │        │
//!   200 + stdout       │                                     ▼        │
//!   ◀──────────────────┼─────────────────────────────── child stdout  │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌────────────┐ ┌──────────┐ │ │
//!                      │  │  │ config │ │observability│ │lifecycle │ │ │
//!                      │  │  └────────┘ └────────────┘ └──────────┘ │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! The collector executable is resolved via `$PATH` and invoked once per
//! scrape with no arguments by default. Its stdout is relayed verbatim;
//! any invocation failure becomes a 500.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use zpool_exporter::config::{loader, validation, ExporterConfig};
use zpool_exporter::lifecycle::{signals, Shutdown};
use zpool_exporter::observability::logging;
use zpool_exporter::HttpServer;

/// Prometheus exporter that relays `zpool_prometheus` output over HTTP.
#[derive(Parser, Debug)]
#[command(name = "zpool-exporter")]
#[command(about = "Serve ZFS pool metrics by relaying a collector executable", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. "127.0.0.1:9700").
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the collector executable name.
    #[arg(long)]
    collector: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => ExporterConfig::default(),
    };

    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(collector) = cli.collector {
        config.collector.command = collector;
    }

    // CLI overrides bypass the loader, so re-validate the merged config.
    if let Err(errors) = validation::validate_config(&config) {
        for err in &errors {
            eprintln!("config error: {}", err);
        }
        return Err("invalid configuration".into());
    }

    logging::init(&config.observability);

    tracing::info!("zpool-exporter v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        collector = %config.collector.command,
        timeout_secs = ?config.collector.timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        trigger.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
