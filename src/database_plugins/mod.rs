// ABOUTME: Database abstraction layer for the registry API
// ABOUTME: Plugin architecture for database support with SQLite and PostgreSQL backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! Data-access gateway
//!
//! Every operation is a single round trip against a pooled connection. The
//! pool is built once at startup and shared through `ServerResources`.

use async_trait::async_trait;
use lugiatrack_core::errors::AppResult;

use crate::config::DatabaseConfig;
use crate::models::{
    Employee, EmployeeCredentials, EmployeeUpdate, Motorcycle, MotorcycleKey, MotorcycleLookup,
    MotorcycleUpdate, NewEmployee,
};

/// Database factory with runtime backend selection
pub mod factory;

/// `SQLite` backend
pub mod sqlite;

/// `PostgreSQL` backend
#[cfg(feature = "postgresql")]
pub mod postgres;

/// SQL and row mapping shared by both backends
pub mod shared;

/// Core database abstraction trait
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Connect and create the schema
    async fn new(config: &DatabaseConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Create tables and unique constraints if absent
    async fn migrate(&self) -> AppResult<()>;

    /// Trivial round trip for readiness checks
    async fn ping(&self) -> AppResult<()>;

    // ================================
    // Employees
    // ================================

    /// Total employee rows
    async fn count_employees(&self) -> AppResult<i64>;

    /// Page of employees ordered by id ascending
    async fn list_employees(&self, offset: i64, limit: i64) -> AppResult<Vec<Employee>>;

    /// Employee by id
    async fn get_employee(&self, id: i64) -> AppResult<Option<Employee>>;

    /// Employee whose email and password both match exactly
    async fn find_employee_by_credentials(
        &self,
        credentials: &EmployeeCredentials,
    ) -> AppResult<Option<Employee>>;

    /// Whether any employee already uses this CPF
    async fn employee_cpf_exists(&self, cpf: &str) -> AppResult<bool>;

    /// Insert and return the stored record with its assigned id
    async fn create_employee(&self, employee: &NewEmployee) -> AppResult<Employee>;

    /// Overwrite the mutable columns; `false` when no row has this id
    async fn update_employee(&self, id: i64, update: &EmployeeUpdate) -> AppResult<bool>;

    /// Hard delete; `false` when no row has this id
    async fn delete_employee(&self, id: i64) -> AppResult<bool>;

    // ================================
    // Motorcycles
    // ================================

    /// Total motorcycle rows
    async fn count_motorcycles(&self) -> AppResult<i64>;

    /// Page of motorcycles ordered by chassis ascending
    async fn list_motorcycles(&self, offset: i64, limit: i64) -> AppResult<Vec<Motorcycle>>;

    /// First row matching chassis OR plate, ordered by (chassis, plate)
    async fn find_motorcycle(&self, lookup: &MotorcycleLookup) -> AppResult<Option<Motorcycle>>;

    /// Whether any motorcycle uses this chassis
    async fn motorcycle_chassis_exists(&self, chassis: &str) -> AppResult<bool>;

    /// Whether any motorcycle uses this plate
    async fn motorcycle_plate_exists(&self, plate: &str) -> AppResult<bool>;

    /// Motorcycle by exact composite key
    async fn get_motorcycle(&self, key: &MotorcycleKey) -> AppResult<Option<Motorcycle>>;

    /// Insert with the caller-assigned key
    async fn create_motorcycle(&self, motorcycle: &Motorcycle) -> AppResult<()>;

    /// Overwrite slot, model, status and description; `false` when the key is absent
    async fn update_motorcycle(
        &self,
        key: &MotorcycleKey,
        update: &MotorcycleUpdate,
    ) -> AppResult<bool>;

    /// Hard delete by composite key; `false` when the key is absent
    async fn delete_motorcycle(&self, key: &MotorcycleKey) -> AppResult<bool>;
}
