// ABOUTME: HTTP integration tests for health and readiness endpoints
// ABOUTME: Confirms both answer without touching the identity service or the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::stubs::{StubBackend, TestGateway};
use serde_json::Value;
use sleep_gateway::routes::HealthRoutes;

#[tokio::test]
async fn test_health_endpoint() {
    let response = AxumTestRequest::get("/health")
        .send(HealthRoutes::routes())
        .await
        .assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "sleep-gateway");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint() {
    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes())
        .await
        .assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_health_stays_up_while_backend_is_down() {
    let gateway = TestGateway::new(StubBackend::failing_with(StatusCode::BAD_GATEWAY));

    let response = AxumTestRequest::get("/health")
        .send(gateway.app())
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(gateway.verifier.calls(), 0);
    assert_eq!(gateway.backend.calls(), 0);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let gateway = TestGateway::new(StubBackend::failing_with(StatusCode::BAD_GATEWAY));

    AxumTestRequest::get("/analyse")
        .send(gateway.app())
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
