// ABOUTME: Domain service layer for registry business rules
// ABOUTME: Validation, uniqueness checks, and not-found mapping shared by route handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! Domain service layer
//!
//! Services validate input before touching storage and return `AppError`
//! values that routes translate to status codes. Handlers stay thin.

use lugiatrack_core::errors::{AppError, AppResult};

use crate::validation::{within_len, within_len_opt};

/// Employee registry operations
pub mod employees;

/// Motorcycle registry operations
pub mod motorcycles;

/// Reject `value` longer than `max` characters
pub(crate) fn ensure_max_len(value: &str, max: usize, field: &str) -> AppResult<()> {
    if within_len(value, max) {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be at most {max} characters"
        )))
    }
}

/// Optional field variant of [`ensure_max_len`]
pub(crate) fn ensure_max_len_opt(value: Option<&str>, max: usize, field: &str) -> AppResult<()> {
    if within_len_opt(value, max) {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be at most {max} characters"
        )))
    }
}
