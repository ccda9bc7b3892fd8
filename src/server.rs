// ABOUTME: HTTP server assembly and lifecycle for the sleep gateway
// ABOUTME: Builds the layered axum router, binds the listener, and drains on shutdown signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gateway Server
//!
//! Layer order, outermost first:
//!
//! 1. `Access-Control-Allow-Origin: *` on every response
//! 2. Request ID assignment (`x-request-id`, UUID v4 unless the caller sent one)
//! 3. Request ID echoed on the response
//! 4. Per-request tracing span
//! 5. Panic recovery into the JSON error envelope
//! 6. Request body size limit
//!
//! The CORS header sits outermost so that it is present even on responses
//! produced by the inner layers themselves.

use crate::middleware::{allow_any_origin_layer, create_request_span, handle_panic};
use crate::resources::ServerResources;
use crate::routes::{AnalyzeRoutes, HealthRoutes};
use anyhow::{anyhow, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the complete application router with all middleware applied
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let body_limit = resources.config.max_request_body_bytes;

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AnalyzeRoutes::routes(resources))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(allow_any_origin_layer())
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let bind_addr = format!(
        "{}:{}",
        resources.config.host, resources.config.http_port
    );
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow!("Failed to bind HTTP listener at {bind_addr}: {e}"))?;

    serve(listener, resources).await
}

/// Serve on an already-bound listener until a shutdown signal arrives
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
///
/// Returns an error if the server fails while running
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> Result<()> {
    let local_addr = listener.local_addr()?;
    info!("HTTP server listening on http://{local_addr}");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("HTTP server failed: {e}"))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
