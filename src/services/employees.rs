// ABOUTME: Employee registry service: listing, lookup, login, and full-replace writes
// ABOUTME: Enforces email shape, CPF format, column limits, and CPF uniqueness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use lugiatrack_core::constants::employee::{
    EMAIL_MAX_LEN, NAME_MAX_LEN, PASSWORD_MAX_LEN, ROLE_MAX_LEN,
};
use lugiatrack_core::errors::{AppError, AppResult};
use lugiatrack_core::pagination::{Page, PageRequest};
use tracing::{debug, info};

use super::{ensure_max_len, ensure_max_len_opt};
use crate::database_plugins::factory::Database;
use crate::database_plugins::DatabaseProvider;
use crate::models::{Employee, EmployeeCredentials, EmployeeUpdate, NewEmployee};
use crate::validation::{cpf_valid, email_valid, is_blank, required_fields_present};

const INVALID_ID: &str = "Invalid ID";
const INVALID_EMAIL: &str = "Invalid email";
const INVALID_CPF: &str = "CPF must contain exactly 11 numeric digits (no punctuation)";
const LOGIN_FAILED: &str = "Invalid email or password";

fn ensure_valid_id(id: i64) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::invalid_input(INVALID_ID));
    }
    Ok(())
}

fn employee_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Employee with ID {id}"))
}

/// Shared by create and update: email shape, CPF digits, column limits
fn validate_profile(name: &str, email: &str, cpf: &str, role: Option<&str>) -> AppResult<()> {
    if !email_valid(email) {
        return Err(AppError::invalid_input(INVALID_EMAIL));
    }
    if !cpf_valid(cpf) {
        return Err(AppError::invalid_input(INVALID_CPF));
    }
    ensure_max_len(name, NAME_MAX_LEN, "Name")?;
    ensure_max_len(email, EMAIL_MAX_LEN, "Email")?;
    ensure_max_len_opt(role, ROLE_MAX_LEN, "Role")
}

/// One page of employees ordered by id
///
/// # Errors
///
/// Returns database errors from the count or page query.
pub async fn list_employees(database: &Database, request: PageRequest) -> AppResult<Page<Employee>> {
    let total = database.count_employees().await?;
    let items = database
        .list_employees(request.offset(), request.limit())
        .await?;
    debug!(page = request.page(), total, returned = items.len(), "Listed employees");
    Ok(Page::new(request, total, items))
}

/// Employee by id
///
/// # Errors
///
/// Returns `InvalidInput` for `id <= 0` and `ResourceNotFound` when no row matches.
pub async fn get_employee(database: &Database, id: i64) -> AppResult<Employee> {
    ensure_valid_id(id)?;
    database
        .get_employee(id)
        .await?
        .ok_or_else(|| employee_not_found(id))
}

/// Plaintext credential check
///
/// The failure message is identical for an unknown email and a wrong password.
///
/// # Errors
///
/// Returns `InvalidInput` for blank or malformed input and `AuthInvalid` on mismatch.
pub async fn login(database: &Database, credentials: &EmployeeCredentials) -> AppResult<Employee> {
    if is_blank(&credentials.email) || is_blank(&credentials.password) {
        return Err(AppError::invalid_input("Email and password are required"));
    }
    if !email_valid(&credentials.email) {
        return Err(AppError::invalid_input(INVALID_EMAIL));
    }

    let employee = database
        .find_employee_by_credentials(credentials)
        .await?
        .ok_or_else(|| AppError::auth_invalid(LOGIN_FAILED))?;
    info!(employee_id = employee.id, "Employee logged in");
    Ok(employee)
}

/// Register an employee; storage assigns the id
///
/// # Errors
///
/// Returns `InvalidInput` for missing or malformed fields and
/// `ResourceAlreadyExists` when the CPF is taken.
pub async fn create_employee(database: &Database, employee: &NewEmployee) -> AppResult<Employee> {
    if !required_fields_present(&[
        &employee.name,
        &employee.email,
        &employee.cpf,
        &employee.password,
    ]) {
        return Err(AppError::invalid_input(
            "All required fields must be filled in",
        ));
    }
    validate_profile(
        &employee.name,
        &employee.email,
        &employee.cpf,
        employee.role.as_deref(),
    )?;
    ensure_max_len(&employee.password, PASSWORD_MAX_LEN, "Password")?;

    if database.employee_cpf_exists(&employee.cpf).await? {
        return Err(AppError::conflict("An employee with this CPF already exists"));
    }

    let created = database.create_employee(employee).await?;
    info!(employee_id = created.id, "Employee created");
    Ok(created)
}

/// Overwrite name, email, CPF and role
///
/// # Errors
///
/// Returns `InvalidInput` for a bad id or fields, `ResourceNotFound` when the
/// row is absent, and `ResourceAlreadyExists` when the new CPF belongs to
/// another employee.
pub async fn update_employee(
    database: &Database,
    id: i64,
    update: &EmployeeUpdate,
) -> AppResult<()> {
    ensure_valid_id(id)?;
    if !required_fields_present(&[&update.name, &update.email, &update.cpf]) {
        return Err(AppError::invalid_input("Name, email and CPF are required"));
    }
    validate_profile(&update.name, &update.email, &update.cpf, update.role.as_deref())?;

    if !database.update_employee(id, update).await? {
        return Err(employee_not_found(id));
    }
    info!(employee_id = id, "Employee updated");
    Ok(())
}

/// Hard delete
///
/// # Errors
///
/// Returns `InvalidInput` for `id <= 0` and `ResourceNotFound` when no row matches.
pub async fn delete_employee(database: &Database, id: i64) -> AppResult<()> {
    ensure_valid_id(id)?;
    if !database.delete_employee(id).await? {
        return Err(employee_not_found(id));
    }
    info!(employee_id = id, "Employee deleted");
    Ok(())
}
