// ABOUTME: Utility module for shared helper functions
// ABOUTME: Bearer token extraction and outbound HTTP client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Authorization header parsing
pub mod auth;
/// Outbound HTTP client builders
pub mod http_client;
