// ABOUTME: Core types and constants for the sleep analysis gateway
// ABOUTME: Foundation crate with error handling, sleep data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sleep Core
//!
//! Foundation crate shared by the gateway binary and its tests. It changes
//! rarely and carries no I/O.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the JSON error envelope
//! - **models**: stage intervals, sleep payloads, analysis results
//! - **constants**: fallback policy values, configuration keys, defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Sleep data models
pub mod models;
