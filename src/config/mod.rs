// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-driven server, database, CORS, and HTTP limits configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! Configuration is read from environment variables only. The binary's
//! command-line flags override individual values after loading.

/// Database URL parsing and pool settings
pub mod database;

/// Server configuration from environment variables
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{CorsConfig, Environment, HttpConfig, ServerConfig};
