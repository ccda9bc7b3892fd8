// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Request IDs, per-request spans, and last-resort panic conversion to HTTP 500
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::response::{IntoResponse, Response};
use std::any::Any;
use tracing::{error, Span};

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Create a tracing span for an HTTP request
///
/// Runs after the request ID has been assigned, so the ID is always present
/// on the span.
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

/// Turn a handler panic into the standard 500 error body
///
/// Panics are bugs, but the caller still gets the same JSON error envelope as
/// every other failure.
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    error!(panic = %detail, "Request handler panicked");
    AppError::internal("Internal server error").into_response()
}
