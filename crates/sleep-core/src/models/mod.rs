// ABOUTME: Core data models shared by the gateway and its tests
// ABOUTME: Re-exports the sleep payload and analysis result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Sleep stage intervals, payloads, and analysis results
pub mod sleep;

pub use sleep::{AnalysisResult, AnalysisSource, SleepPayload, SleepStageType, StageInterval};
