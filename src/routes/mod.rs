// ABOUTME: Route module organization for the sleep gateway HTTP endpoints
// ABOUTME: Groups routes by domain with thin handlers delegating to the analysis layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the sleep gateway
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the analysis layer.

/// Sleep analysis routes
pub mod analyze;
/// Health check and readiness routes
pub mod health;

/// Sleep analysis route handlers
pub use analyze::AnalyzeRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
