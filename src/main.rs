//! Simulation console shell (v0.1)
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser / client
//!        │  GET /simulation
//!        ▼
//!   ┌──────────┐    ┌───────────────┐    ┌──────────────┐
//!   │   http   │───▶│  Application  │───▶│   routing    │
//!   │  server  │    │     root      │    │ route table  │
//!   └──────────┘    └───────┬───────┘    └──────┬───────┘
//!        ▲                  │                   │ page
//!        │                  ▼                   ▼
//!        │          ┌───────────────┐    ┌──────────────┐
//!        └──────────│ layout shell  │◀───│  page (slot) │
//!        document   └───────────────┘    └──────────────┘
//!
//!   Cross-cutting: config · observability · lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use sim_shell::lifecycle::{signals, startup};
use sim_shell::observability::{logging, metrics};
use sim_shell::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "sim-shell")]
#[command(about = "Serve the simulation console route table", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = startup::load(args.config.as_deref(), args.bind.as_deref())?;
    logging::init_logging(&config.observability)?;

    tracing::info!("sim-shell v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        source = %startup::config_source(args.config.as_deref()),
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        fallback = ?config.routing.fallback,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let app = startup::build_application(&config)?;
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::with_application(config, app);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::wait_for_signal(shutdown.clone()));

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
