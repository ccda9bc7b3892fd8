// ABOUTME: Persistence seam for analysis results
// ABOUTME: Ships a no-op store; analyses are not persisted yet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis persistence
//!
//! The orchestrator offers each remote analysis to an [`AnalysisStore`] once
//! the caller's identity is known. The only shipped store discards it: no
//! analysis is persisted today. Enabling persistence means providing another
//! implementation; the orchestrator does not change.

use crate::auth::Principal;
use crate::errors::AppResult;
use async_trait::async_trait;
use serde_json::value::RawValue;
use tracing::trace;

/// Sink for completed remote analyses
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Record `analysis` as belonging to `principal`
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The orchestrator logs it and
    /// still answers the caller.
    async fn record(&self, principal: &Principal, analysis: &RawValue) -> AppResult<()>;
}

/// Store that accepts and discards every analysis
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalysisStore;

#[async_trait]
impl AnalysisStore for NoopAnalysisStore {
    async fn record(&self, principal: &Principal, _analysis: &RawValue) -> AppResult<()> {
        trace!(user.id = %principal.id, "Analysis persistence disabled, discarding result");
        Ok(())
    }
}
