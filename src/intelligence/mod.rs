// ABOUTME: Local sleep intelligence that runs inside the gateway process
// ABOUTME: Hosts the fallback estimator used when the analysis backend is unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The authoritative analysis lives in a remote service. What remains local is
//! the approximation served while that service is unreachable.

/// Fallback estimator for sleep-quality analysis
pub mod fallback_estimator;

pub use fallback_estimator::FallbackEstimator;
