// ABOUTME: Request orchestration for sleep analysis with graceful degradation
// ABOUTME: Authenticates, dispatches to the backend once, and falls back locally on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis Orchestrator
//!
//! One call to [`AnalysisOrchestrator::handle`] per inbound request:
//!
//! 1. Extract the bearer credential and verify it (`AUTH_MISSING` / `AUTH_INVALID`)
//! 2. Parse the body as a sleep payload (`PAYLOAD_MALFORMED`)
//! 3. Forward the payload to the backend, exactly once
//! 4. Backend answered: pass its JSON through untouched
//! 5. Backend unavailable: log the degradation, answer with the fallback estimate
//!
//! Backend unavailability is an ordinary branch here, never an error.

use crate::analysis::backend::AnalysisBackend;
use crate::auth::IdentityVerifier;
use crate::errors::{AppError, AppResult};
use crate::intelligence::FallbackEstimator;
use crate::logging::AppLogger;
use crate::models::{AnalysisResult, AnalysisSource, SleepPayload};
use crate::storage::AnalysisStore;
use crate::utils::auth::extract_bearer_token;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::value::RawValue;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

/// Result of a successful analysis request
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Backend answer, byte for byte as received
    Remote(Box<RawValue>),
    /// Local approximation served while the backend was unavailable
    Fallback(AnalysisResult),
}

impl AnalysisOutcome {
    /// Where this outcome came from
    #[must_use]
    pub const fn source(&self) -> AnalysisSource {
        match self {
            Self::Remote(_) => AnalysisSource::Remote,
            Self::Fallback(_) => AnalysisSource::Fallback,
        }
    }
}

impl IntoResponse for AnalysisOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Remote(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
            Self::Fallback(estimate) => (StatusCode::OK, Json(estimate)).into_response(),
        }
    }
}

/// Parsed inbound body: the raw document for forwarding, the typed view for fallback
struct InboundPayload {
    raw: Box<RawValue>,
    typed: SleepPayload,
}

impl InboundPayload {
    fn parse(body: &[u8]) -> AppResult<Self> {
        let raw: Box<RawValue> = serde_json::from_slice(body)
            .map_err(|e| AppError::invalid_input(format!("Invalid JSON payload: {e}")))?;

        if !raw.get().starts_with('{') {
            return Err(AppError::invalid_input("Payload must be a JSON object"));
        }

        let typed: SleepPayload = serde_json::from_str(raw.get())
            .map_err(|e| AppError::invalid_input(format!("Invalid sleep payload: {e}")))?;

        Ok(Self { raw, typed })
    }
}

/// Coordinates identity verification, remote analysis, and fallback
///
/// Holds no per-request state, so one instance serves all requests
/// concurrently.
#[derive(Clone)]
pub struct AnalysisOrchestrator {
    verifier: Arc<dyn IdentityVerifier>,
    backend: Arc<dyn AnalysisBackend>,
    store: Arc<dyn AnalysisStore>,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator from its collaborators
    #[must_use]
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        backend: Arc<dyn AnalysisBackend>,
        store: Arc<dyn AnalysisStore>,
    ) -> Self {
        Self {
            verifier,
            backend,
            store,
        }
    }

    /// Handle one analysis request
    ///
    /// `authorization` is the raw `Authorization` header value, `body` the
    /// raw request body.
    ///
    /// # Errors
    ///
    /// - `AUTH_MISSING` when no credential was sent
    /// - `AUTH_INVALID` when the credential is malformed or rejected
    /// - `PAYLOAD_MALFORMED` when the body is not a JSON sleep payload
    /// - `UNEXPECTED` when the backend answered 2xx with an unreadable body
    ///
    /// The backend call is skipped entirely on any of the first three.
    pub async fn handle(
        &self,
        authorization: Option<&str>,
        body: &[u8],
    ) -> AppResult<AnalysisOutcome> {
        let started = Instant::now();

        let token = extract_bearer_token(authorization).inspect_err(|e| {
            AppLogger::log_auth_event(None, false, Some(e.message.as_str()));
        })?;
        let principal = self.verifier.verify(token).await.inspect_err(|e| {
            AppLogger::log_auth_event(None, false, Some(e.message.as_str()));
        })?;
        AppLogger::log_auth_event(Some(&principal.id), true, None);

        let payload = InboundPayload::parse(body)?;

        let outcome = match self.backend.analyze(&payload.raw).await {
            Ok(analysis) => {
                if let Err(e) = self.store.record(&principal, &analysis).await {
                    warn!(user.id = %principal.id, error = %e, "Failed to persist analysis");
                }
                AnalysisOutcome::Remote(analysis)
            }
            Err(e) if e.is_unavailable() => {
                AppLogger::log_analysis_degraded(&e.to_string(), e.status());
                AnalysisOutcome::Fallback(FallbackEstimator::estimate(payload.typed.stages()))
            }
            Err(e) => return Err(e.into()),
        };

        AppLogger::log_analysis_completed(outcome.source(), elapsed_ms(started));
        Ok(outcome)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
