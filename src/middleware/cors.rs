// ABOUTME: CORS handling for HTTP API endpoints
// ABOUTME: Allow-all origin header on every response plus the preflight responder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::cors;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tower_http::set_header::SetResponseHeaderLayer;

/// Layer stamping `Access-Control-Allow-Origin: *` on every response
///
/// Applied outermost so success, fallback, error, and rejection responses
/// produced by axum itself all carry it. Browser callers are never blocked by
/// origin policy.
#[must_use]
pub fn allow_any_origin_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(cors::ALLOW_ORIGIN),
    )
}

/// Answer a CORS preflight
///
/// Terminal: nothing is authenticated, parsed, or forwarded.
pub async fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(cors::ALLOW_METHODS),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(cors::ALLOW_HEADERS),
            ),
        ],
    )
        .into_response()
}
