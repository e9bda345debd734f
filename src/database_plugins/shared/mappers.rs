// ABOUTME: Model to SQL row conversion helpers for database operations.
// ABOUTME: Provides generic row parsing functions for PostgreSQL and SQLite backends.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! Model ↔ SQL row conversion helpers
//!
//! Generic over `sqlx::Row` so the same parsing serves `PgRow` and `SqliteRow`.

use lugiatrack_core::errors::{AppError, AppResult};

use crate::models::{Employee, Motorcycle};

fn column<'r, R, T>(row: &'r R, name: &str) -> AppResult<T>
where
    R: sqlx::Row,
    for<'a> &'a str: sqlx::ColumnIndex<R>,
    T: sqlx::Type<R::Database> + sqlx::Decode<'r, R::Database>,
{
    row.try_get(name)
        .map_err(|e| AppError::database(format!("Failed to get column '{name}': {e}")))
}

/// Parse an `Employee` from a `tbl_funcionarios` row (password column not selected)
///
/// # Errors
///
/// Returns an error if a required column is missing or has an unexpected type
pub fn parse_employee_from_row<R>(row: &R) -> AppResult<Employee>
where
    R: sqlx::Row,
    for<'a> &'a str: sqlx::ColumnIndex<R>,
    i64: for<'a> sqlx::Type<R::Database> + for<'a> sqlx::Decode<'a, R::Database>,
    String: for<'a> sqlx::Type<R::Database> + for<'a> sqlx::Decode<'a, R::Database>,
    Option<String>: for<'a> sqlx::Type<R::Database> + for<'a> sqlx::Decode<'a, R::Database>,
{
    Ok(Employee {
        id: column(row, "id_funcionario")?,
        name: column(row, "nome")?,
        email: column(row, "email")?,
        cpf: column(row, "cpf")?,
        role: column(row, "cargo")?,
    })
}

/// Parse a `Motorcycle` from a `tbl_moto` row
///
/// # Errors
///
/// Returns an error if a required column is missing or has an unexpected type
pub fn parse_motorcycle_from_row<R>(row: &R) -> AppResult<Motorcycle>
where
    R: sqlx::Row,
    for<'a> &'a str: sqlx::ColumnIndex<R>,
    i32: for<'a> sqlx::Type<R::Database> + for<'a> sqlx::Decode<'a, R::Database>,
    String: for<'a> sqlx::Type<R::Database> + for<'a> sqlx::Decode<'a, R::Database>,
    Option<String>: for<'a> sqlx::Type<R::Database> + for<'a> sqlx::Decode<'a, R::Database>,
{
    Ok(Motorcycle {
        chassis: column(row, "chassi")?,
        plate: column(row, "placa")?,
        slot_id: column(row, "id_vaga")?,
        model: column(row, "modelo")?,
        status: column(row, "status")?,
        description: column(row, "descricao")?,
    })
}
