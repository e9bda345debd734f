// ABOUTME: Main library entry point for the LugiaTrack registry API
// ABOUTME: Exposes employee and motorcycle CRUD over REST backed by SQLite or PostgreSQL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

#![deny(unsafe_code)]

//! # LugiaTrack API
//!
//! REST backend for a motorcycle yard registry. It keeps two record types:
//!
//! - **Employees** (`/funcionarios`): CRUD plus a credential check at
//!   `/funcionarios/login`
//! - **Motorcycles** (`/motos`): CRUD keyed by chassis and plate, with a
//!   lookup at `/motos/buscar`
//!
//! ## Architecture
//!
//! - **Routes**: axum handlers that translate wire DTOs into domain models
//! - **Services**: validation and business rules over a [`Database`](database_plugins::factory::Database)
//! - **Database plugins**: a [`DatabaseProvider`](database_plugins::DatabaseProvider)
//!   trait with SQLite and PostgreSQL backends
//! - **Config**: environment-driven server and database settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use lugiatrack_api::config::ServerConfig;
//! use lugiatrack_api::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("LugiaTrack API configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-driven server and database configuration
pub mod config;

/// Storage abstraction and backend implementations
pub mod database_plugins;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: CORS and request tracing
pub mod middleware;

/// Domain models for employees and motorcycles
pub mod models;

/// Shared server state handed to route handlers
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Router assembly and the serve loop
pub mod server;

/// Business rules for each record type
pub mod services;

/// Field-level validation helpers
pub mod validation;

pub use lugiatrack_core::{constants, errors, pagination};
