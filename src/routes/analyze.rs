// ABOUTME: Sleep analysis route handlers
// ABOUTME: POST /analyze delegates to the orchestrator; OPTIONS /analyze answers preflight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sleep analysis routes
//!
//! Thin HTTP adapter over [`AnalysisOrchestrator`]: pull the credential and
//! body off the request, hand them over, render the outcome. Status codes come
//! from the outcome (always 200) or the error code.

use crate::analysis::AnalysisOrchestrator;
use crate::constants::endpoints;
use crate::errors::AppError;
use crate::middleware::preflight;
use crate::resources::ServerResources;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::sync::Arc;

/// Sleep analysis routes
pub struct AnalyzeRoutes;

impl AnalyzeRoutes {
    /// Create the analysis routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                endpoints::ANALYZE,
                post(Self::handle_analyze).options(preflight),
            )
            .with_state(resources)
    }

    /// Handle a sleep analysis request
    async fn handle_analyze(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .map(|value| {
                value
                    .to_str()
                    .map_err(|_| AppError::auth_invalid("Authorization header is not valid text"))
            })
            .transpose()?;

        let orchestrator: &AnalysisOrchestrator = &resources.orchestrator;
        let outcome = orchestrator.handle(authorization, &body).await?;

        Ok(outcome.into_response())
    }
}
