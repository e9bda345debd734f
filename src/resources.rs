// ABOUTME: Dependency injection container shared by every route handler
// ABOUTME: Holds the database handle and server configuration behind Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::database_plugins::factory::Database;

/// Shared server state, built once at startup and cloned cheaply into handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Data-access handle (owns the connection pool)
    pub database: Arc<Database>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database: Arc::new(database),
            config: Arc::new(config),
        }
    }
}
