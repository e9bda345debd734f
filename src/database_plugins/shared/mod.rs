// ABOUTME: Shared database logic for PostgreSQL and SQLite implementations
// ABOUTME: Common SQL statements and generic row mappers used by both backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

/// Model ↔ SQL row conversion helpers
pub mod mappers;

/// SQL statements portable across both backends (`$n` placeholders)
pub mod queries;

use lugiatrack_core::errors::AppError;

/// Map a failed write, turning unique-constraint violations into conflicts
#[must_use]
pub fn write_error(error: &sqlx::Error, operation: &str, conflict_message: &str) -> AppError {
    match error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            AppError::conflict(conflict_message)
        }
        _ => AppError::database(format!("Failed to {operation}: {error}")),
    }
}

/// Map a failed read
#[must_use]
pub fn read_error(error: &sqlx::Error, operation: &str) -> AppError {
    AppError::database(format!("Failed to {operation}: {error}"))
}
