// ABOUTME: Main library entry point for the sleep analysis gateway
// ABOUTME: Authenticated HTTP front door to the remote sleep analysis service with local fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sleep Gateway
//!
//! An HTTP gateway in front of a remote sleep analysis service. Callers post
//! sleep session data with a bearer credential; the gateway verifies the
//! credential against an external identity service, forwards the payload to
//! the analysis backend, and relays the answer.
//!
//! When the backend cannot answer (error status, timeout, unreachable), the
//! caller still gets HTTP 200 with a coarse local estimate marked
//! `"source": "FALLBACK"`.
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers for `/analyze`, `/health`, `/ready`
//! - **Analysis**: backend client and the per-request orchestrator
//! - **Auth**: identity verification seam and its HTTP implementation
//! - **Intelligence**: the fallback estimator
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sleep_gateway::config::ServerConfig;
//! use sleep_gateway::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Sleep gateway configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Error types and HTTP status mapping
pub use sleep_core::errors;

/// Fallback constants, configuration keys, and defaults
pub use sleep_core::constants;

/// Sleep payload and analysis result models
pub use sleep_core::models;

/// Remote analysis client and request orchestration
pub mod analysis;

/// Caller identity verification
pub mod auth;

/// Environment-based configuration
pub mod config;

/// Local fallback estimation
pub mod intelligence;

/// Structured logging setup and application log events
pub mod logging;

/// HTTP middleware: CORS, request tracing, panic recovery
pub mod middleware;

/// Shared server resources for dependency injection
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Analysis persistence seam
pub mod storage;

/// Shared helpers
pub mod utils;
