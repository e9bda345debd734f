// ABOUTME: Server binary for the LugiaTrack registry API
// ABOUTME: Loads environment configuration, connects the database, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! # LugiaTrack API Server Binary

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use lugiatrack_api::{
    config::{DatabaseUrl, ServerConfig},
    database_plugins::{factory::Database, DatabaseProvider},
    logging,
    resources::ServerResources,
    server,
};
use tracing::{error, info};

/// Command-line overrides applied on top of the environment
#[derive(Parser)]
#[command(name = "lugiatrack-server")]
#[command(about = "LugiaTrack API - employee and motorcycle registry", version)]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override `DATABASE_URL`
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(database_url)?;
    }

    info!("{}", config.summary());

    let database = match Database::new(&config.database).await {
        Ok(database) => database,
        Err(e) => {
            error!("Database initialization failed: {e}");
            return Err(e.into());
        }
    };
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    let resources = Arc::new(ServerResources::new(database, config));
    server::run(resources).await
}
