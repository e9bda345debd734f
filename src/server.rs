// ABOUTME: HTTP server assembly: routes, middleware stack, listener, and graceful shutdown
// ABOUTME: build_router is shared by the binary and the integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::middleware::from_fn;
use axum::Router;
use http::{HeaderName, StatusCode};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::middleware::{
    attach_request_id, make_request_span, setup_cors, MakeRequestUuid, REQUEST_ID_HEADER,
};
use crate::resources::ServerResources;
use crate::routes::{EmployeeRoutes, HealthRoutes, MotorcycleRoutes};

/// Build the complete application router with middleware
#[must_use]
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let config = &resources.config;
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let router = Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(EmployeeRoutes::routes(Arc::clone(resources)))
        .merge(MotorcycleRoutes::routes(Arc::clone(resources)));

    #[cfg(feature = "openapi")]
    let router = router.merge(crate::routes::OpenApiRoutes::routes());

    // Layers wrap inside-out: the request id is set before the trace span opens
    router
        .layer(from_fn(attach_request_id))
        .layer(RequestBodyLimitLayer::new(config.http.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.http.request_timeout(),
        ))
        .layer(setup_cors(&config.cors))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
}

/// Bind the listener and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("HTTP server listening on http://{address}");
    log_endpoints();

    axum::serve(listener, build_router(&resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

fn log_endpoints() {
    info!("Available endpoints:");
    info!("  GET    /funcionarios?page&pageSize");
    info!("  GET    /funcionarios/:id");
    info!("  POST   /funcionarios/login");
    info!("  POST   /funcionarios");
    info!("  PUT    /funcionarios/:id");
    info!("  DELETE /funcionarios/:id");
    info!("  GET    /motos?page&pageSize");
    info!("  GET    /motos/buscar?chassi&placa");
    info!("  POST   /motos");
    info!("  PUT    /motos/:chassi/:placa");
    info!("  DELETE /motos?chassi&placa");
    info!("  GET    /health, /ready");
    #[cfg(feature = "openapi")]
    info!("  GET    /swagger-ui, /api-docs/openapi.json");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
