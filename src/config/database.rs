// ABOUTME: Database connection configuration and URL parsing
// ABOUTME: Supports file-backed SQLite, in-memory SQLite, and PostgreSQL URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use std::env;
use std::fmt;
use std::path::PathBuf;

use lugiatrack_core::errors::{AppError, AppResult};

use super::environment::env_parse_or;

/// Default `DATABASE_URL` when none is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/lugiatrack.db";

/// Default pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Type-safe database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// `PostgreSQL` connection
    PostgreSQL {
        /// `PostgreSQL` connection string
        connection_string: String,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unsupported URL schemes
    pub fn parse_url(s: &str) -> AppResult<Self> {
        if let Some(rest) = s.strip_prefix("sqlite:") {
            let path_str = rest.strip_prefix("//").unwrap_or(rest);
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else if path_str.is_empty() {
                Err(AppError::config("SQLite database URL is missing a file path"))
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            Ok(Self::PostgreSQL {
                connection_string: s.to_owned(),
            })
        } else {
            Err(AppError::config(format!(
                "Unsupported database URL format: {s}"
            )))
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::PostgreSQL { connection_string } => connection_string.clone(),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Connection string with any `user:password@` section masked
    #[must_use]
    pub fn redacted(&self) -> String {
        let raw = self.to_connection_string();
        let Some(scheme_end) = raw.find("://") else {
            return raw;
        };
        let authority_start = scheme_end + 3;
        let authority_end = raw[authority_start..]
            .find('/')
            .map_or(raw.len(), |i| authority_start + i);
        match raw[authority_start..authority_end].rfind('@') {
            Some(at) => format!(
                "{}***{}",
                &raw[..authority_start],
                &raw[authority_start + at..]
            ),
            None => raw,
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/lugiatrack.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: DatabaseUrl,
    /// Maximum pooled connections (in-memory `SQLite` always uses one)
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Load database configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` uses an unsupported scheme
    pub fn from_env() -> AppResult<Self> {
        let raw = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        Ok(Self {
            url: DatabaseUrl::parse_url(&raw)?,
            max_connections: env_parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
        })
    }
}
