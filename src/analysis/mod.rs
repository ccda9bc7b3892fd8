// ABOUTME: Sleep analysis pipeline: remote backend client and request orchestration
// ABOUTME: Ties identity verification, remote dispatch, and local fallback together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Remote analysis backend client
pub mod backend;
/// Per-request orchestration with graceful degradation
pub mod orchestrator;

pub use backend::{AnalysisBackend, BackendError, HttpAnalysisBackend};
pub use orchestrator::{AnalysisOrchestrator, AnalysisOutcome};
