//! User Portal
//!
//! A small web portal in front of a third-party REST API, built with Tokio
//! and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 USER PORTAL                  │
//!                      │                                              │
//!   Browser request    │  ┌────────┐   ┌──────────┐   ┌───────────┐  │
//!   ──────────────────┼─▶│  http  │──▶│ resource │──▶│ upstream  │──┼──▶ REST API
//!                      │  │ server │   │  mapper  │   │  client   │  │
//!   Browser response   │  └────────┘   └──────────┘   └───────────┘  │
//!   ◀──────────────────┼───────┘                                     │
//!                      │  ┌────────┐  boot-time GET   ┌───────────┐  │
//!                      │  │ render │◀─────────────────│ snapshot  │  │
//!                      │  └────────┘                  └───────────┘  │
//!                      │                                              │
//!                      │  ┌────────────────────────────────────────┐ │
//!                      │  │ config  ·  observability (logs/metrics)│ │
//!                      │  └────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! The listing snapshot is fetched exactly once at startup; CRUD routes
//! forward one-for-one to the upstream API and hold no state of their own.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use user_portal::config::resolve_config;
use user_portal::http::HttpServer;
use user_portal::observability::{logging, metrics};
use user_portal::render;
use user_portal::upstream::UpstreamClient;

#[derive(Parser)]
#[command(name = "user-portal")]
#[command(about = "Web portal forwarding user CRUD to a remote REST API", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_base_url = %config.upstream.base_url,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "failed to parse metrics address"
            ),
        }
    }

    let upstream = Arc::new(UpstreamClient::new(&config.upstream, &config.timeouts)?);

    // Boot-time listing fetch; failure here is fatal before serving.
    let snapshot = render::boot_snapshot(&upstream).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    let server = HttpServer::new(&config, upstream, snapshot);
    server.run(listener).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
