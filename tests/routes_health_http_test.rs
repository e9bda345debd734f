// ABOUTME: HTTP integration tests for health routes and the shared middleware stack
// ABOUTME: Tests liveness, readiness, request id propagation, CORS, and body limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use std::sync::Arc;

use common::{create_test_database, create_test_resources, create_test_router, memory_database_config};
use helpers::axum_test::AxumTestRequest;
use lugiatrack_api::{
    config::{HttpConfig, ServerConfig},
    resources::ServerResources,
    routes::HealthRoutes,
    server::build_router,
};
use serde_json::Value;

// ============================================================================
// GET /health and GET /ready
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let resources = create_test_resources().await;

    let response = AxumTestRequest::get("/health")
        .send(HealthRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "lugiatrack-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_ready_endpoint_pings_database() {
    let resources = create_test_resources().await;

    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_router().await;

    let response = AxumTestRequest::get("/nao-existe").send(app).await;

    assert_eq!(response.status(), 404);
}

// ============================================================================
// Middleware
// ============================================================================

#[tokio::test]
async fn test_request_id_is_generated() {
    let app = create_test_router().await;

    let response = AxumTestRequest::get("/health").send(app).await;

    let request_id = response.header("x-request-id").unwrap();
    assert!(request_id.starts_with("req_"));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = create_test_router().await;

    let response = AxumTestRequest::get("/funcionarios/9999")
        .header("x-request-id", "trace-abc-123")
        .send(app)
        .await;

    assert_eq!(response.status(), 404);
    assert_eq!(response.header("x-request-id").unwrap(), "trace-abc-123");
    let body: Value = response.json();
    assert_eq!(body["error"]["request_id"], "trace-abc-123");
}

#[tokio::test]
async fn test_error_body_carries_generated_request_id() {
    let app = create_test_router().await;

    let response = AxumTestRequest::get("/motos/buscar").send(app).await;

    assert_eq!(response.status(), 400);
    let request_id = response.header("x-request-id").unwrap();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["request_id"], request_id.as_str());
}

#[tokio::test]
async fn test_success_body_is_left_untouched() {
    let app = create_test_router().await;

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "trace-ok")
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert!(body.get("error").is_none());
    assert!(body.get("request_id").is_none());
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = create_test_router().await;

    let response = AxumTestRequest::get("/health")
        .header("origin", "http://painel.lugiatrack.local")
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("access-control-allow-origin").unwrap(), "*");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let database = create_test_database().await;
    let config = ServerConfig {
        database: memory_database_config(),
        http: HttpConfig {
            max_body_bytes: 64,
            ..HttpConfig::default()
        },
        ..ServerConfig::default()
    };
    let app = build_router(&Arc::new(ServerResources::new(database, config)));
    let body = format!("{{\"nome\": \"{}\"}}", "x".repeat(128));

    let response = AxumTestRequest::post("/funcionarios")
        .header("content-length", &body.len().to_string())
        .raw_body("application/json", &body)
        .send(app)
        .await;

    assert_eq!(response.status(), 413);
}
