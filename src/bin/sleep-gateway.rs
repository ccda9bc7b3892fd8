// ABOUTME: Sleep gateway server binary
// ABOUTME: Loads environment configuration, wires the outbound clients, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sleep Gateway Binary
//!
//! Starts the HTTP gateway in front of the sleep analysis service.

use anyhow::Result;
use clap::Parser;
use sleep_gateway::{
    config::ServerConfig, constants::endpoints, logging, resources::ServerResources, server,
};
use std::sync::Arc;
use tracing::{error, info};

/// Command-line overrides applied on top of environment configuration
#[derive(Parser)]
#[command(name = "sleep-gateway")]
#[command(about = "Sleep analysis gateway - authenticated proxy with local fallback")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting sleep gateway");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::from_config(config)?);

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!(
        "   Sleep Analysis:    POST http://{host}:{port}{}",
        endpoints::ANALYZE
    );
    info!("   Health:            GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!(
        "   Analysis Backend:  {}",
        config.analysis_service.analyze_url()
    );
    info!("=== End of Endpoint List ===");
}
