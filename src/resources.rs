// ABOUTME: Centralized resource container for dependency injection in the gateway
// ABOUTME: Builds the outbound clients once and shares them across all requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Everything a request handler needs, constructed once at startup and shared
//! behind an `Arc`. Route builders take `Arc<ServerResources>` instead of
//! individual collaborators.

use crate::analysis::{AnalysisBackend, AnalysisOrchestrator, HttpAnalysisBackend};
use crate::auth::{IdentityVerifier, RemoteIdentityVerifier};
use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::storage::{AnalysisStore, NoopAnalysisStore};
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration loaded at startup
    pub config: Arc<ServerConfig>,
    /// Request pipeline shared by every analysis request
    pub orchestrator: AnalysisOrchestrator,
}

impl ServerResources {
    /// Assemble resources from explicit collaborators
    ///
    /// Integration tests use this to swap in stub verifiers and backends.
    #[must_use]
    pub fn new(
        config: Arc<ServerConfig>,
        verifier: Arc<dyn IdentityVerifier>,
        backend: Arc<dyn AnalysisBackend>,
        store: Arc<dyn AnalysisStore>,
    ) -> Self {
        Self {
            config,
            orchestrator: AnalysisOrchestrator::new(verifier, backend, store),
        }
    }

    /// Build production resources from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if either outbound HTTP client cannot be constructed
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let verifier = RemoteIdentityVerifier::new(&config.identity_service)?;
        let backend = HttpAnalysisBackend::new(&config.analysis_service)?;

        Ok(Self::new(
            Arc::new(config),
            Arc::new(verifier),
            Arc::new(backend),
            Arc::new(NoopAnalysisStore),
        ))
    }
}
