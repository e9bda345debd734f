// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, server resources, and router helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::expect_used
)]
//! Shared test utilities for `lugiatrack_api`

use std::sync::{Arc, Once};

use lugiatrack_api::{
    config::{DatabaseConfig, DatabaseUrl, ServerConfig},
    database_plugins::{factory::Database, DatabaseProvider},
    resources::ServerResources,
    server::build_router,
};
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Database configuration for a private in-memory `SQLite` store
pub fn memory_database_config() -> DatabaseConfig {
    DatabaseConfig {
        url: DatabaseUrl::Memory,
        max_connections: 1,
    }
}

/// Fresh, migrated in-memory database
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new(&memory_database_config())
        .await
        .expect("Failed to create in-memory database")
}

/// Server resources over a fresh in-memory database
pub async fn create_test_resources() -> Arc<ServerResources> {
    let database = create_test_database().await;
    let config = ServerConfig {
        database: memory_database_config(),
        ..ServerConfig::default()
    };
    Arc::new(ServerResources::new(database, config))
}

/// Full application router (middleware included) over a fresh database
pub async fn create_test_router() -> axum::Router {
    let resources = create_test_resources().await;
    build_router(&resources)
}

/// Valid employee body; `cpf` and `email` vary per caller
pub fn employee_body(name: &str, email: &str, cpf: &str) -> Value {
    json!({
        "nome": name,
        "senha": "s3nha-forte",
        "email": email,
        "cpf": cpf,
        "cargo": "Mecânico"
    })
}

/// Valid motorcycle body
pub fn motorcycle_body(chassis: &str, plate: &str) -> Value {
    json!({
        "chassi": chassis,
        "placa": plate,
        "id_vaga": 3,
        "modelo": "CG 160 Titan",
        "status": 1,
        "descricao": "Revisão em dia"
    })
}
