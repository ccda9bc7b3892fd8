// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! Neither endpoint touches the identity service or the analysis backend:
//! backend outages are absorbed by the fallback, so they do not make the
//! gateway unhealthy.

use crate::constants::service_names;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "service": service_names::SLEEP_GATEWAY,
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler() -> Json<Value> {
            Json(json!({
                "status": "ready",
                "service": service_names::SLEEP_GATEWAY,
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
    }
}
