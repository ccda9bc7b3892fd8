// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the sleep gateway
//!
//! - **Environment**: server, analysis backend, and identity service settings

/// Environment and server configuration
pub mod environment;

pub use environment::{AnalysisServiceConfig, Environment, IdentityServiceConfig, ServerConfig};
