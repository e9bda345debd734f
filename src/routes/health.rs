// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness at /health and database-backed readiness at /ready
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! Health check routes for service monitoring

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::database_plugins::DatabaseProvider;
use crate::logging::SERVICE_NAME;
use crate::resources::ServerResources;

/// Body of GET /health and GET /ready
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// `ok`, `ready` or `unavailable`
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
}

impl HealthResponse {
    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_owned(),
            service: SERVICE_NAME.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    /// Handle GET /health - Process is up
    async fn handle_health() -> Json<HealthResponse> {
        Json(HealthResponse::with_status("ok"))
    }

    /// Handle GET /ready - Database answers a trivial query
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.database.ping().await {
            Ok(()) => (StatusCode::OK, Json(HealthResponse::with_status("ready"))).into_response(),
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(HealthResponse::with_status("unavailable")),
                )
                    .into_response()
            }
        }
    }
}
