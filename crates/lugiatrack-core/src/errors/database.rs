// ABOUTME: Conversion from sqlx errors into AppError
// ABOUTME: Unique-constraint violations surface as conflicts instead of server errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use super::{AppError, ErrorCode};

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => Self::not_found("Record"),
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => Self::new(
                ErrorCode::ResourceAlreadyExists,
                "A record with the same unique key already exists",
            ),
            _ => Self::database(format!("Database operation failed: {error}")),
        }
    }
}
