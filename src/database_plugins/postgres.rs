// ABOUTME: PostgreSQL implementation of the DatabaseProvider trait
// ABOUTME: Server-backed pool for production deployments with the same schema as SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! `PostgreSQL` database implementation

use std::time::Duration;

use async_trait::async_trait;
use lugiatrack_core::errors::{AppError, AppResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};

use super::shared::{mappers, queries, read_error, write_error};
use super::DatabaseProvider;
use crate::config::DatabaseConfig;
use crate::models::{
    Employee, EmployeeCredentials, EmployeeUpdate, Motorcycle, MotorcycleKey, MotorcycleLookup,
    MotorcycleUpdate, NewEmployee,
};

/// Seconds to wait for a pooled connection
const ACQUIRE_TIMEOUT_SECS: u64 = 30;

const EMPLOYEE_CONFLICT: &str = "An employee with this CPF already exists";
const MOTORCYCLE_CONFLICT: &str = "A motorcycle with this chassis or plate already exists";

/// `PostgreSQL` database implementation
#[derive(Clone)]
pub struct PostgresDatabase {
    pool: PgPool,
}

#[async_trait]
impl DatabaseProvider for PostgresDatabase {
    async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
            .connect(&config.url.to_connection_string())
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to PostgreSQL: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        info!(database = %config.url, "PostgreSQL database ready");
        Ok(db)
    }

    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS tbl_funcionarios (
                id_funcionario BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
                nome VARCHAR(70) NOT NULL,
                senha VARCHAR(256) NOT NULL,
                email VARCHAR(50) NOT NULL,
                cpf VARCHAR(11) NOT NULL UNIQUE,
                cargo VARCHAR(30)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create tbl_funcionarios: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS tbl_moto (
                chassi VARCHAR(17) NOT NULL UNIQUE,
                placa VARCHAR(7) NOT NULL UNIQUE,
                id_vaga INTEGER NOT NULL,
                modelo VARCHAR(30) NOT NULL,
                status INTEGER NOT NULL,
                descricao VARCHAR(1000),
                PRIMARY KEY (chassi, placa)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create tbl_moto: {e}")))?;

        debug!("PostgreSQL schema up to date");
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query(queries::PING)
            .execute(&self.pool)
            .await
            .map_err(|e| read_error(&e, "ping database"))?;
        Ok(())
    }

    async fn count_employees(&self) -> AppResult<i64> {
        sqlx::query_scalar(queries::COUNT_EMPLOYEES)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| read_error(&e, "count employees"))
    }

    async fn list_employees(&self, offset: i64, limit: i64) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query(queries::LIST_EMPLOYEES)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| read_error(&e, "list employees"))?;
        rows.iter().map(mappers::parse_employee_from_row).collect()
    }

    async fn get_employee(&self, id: i64) -> AppResult<Option<Employee>> {
        sqlx::query(queries::GET_EMPLOYEE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| read_error(&e, "get employee"))?
            .as_ref()
            .map(mappers::parse_employee_from_row)
            .transpose()
    }

    async fn find_employee_by_credentials(
        &self,
        credentials: &EmployeeCredentials,
    ) -> AppResult<Option<Employee>> {
        sqlx::query(queries::FIND_EMPLOYEE_BY_CREDENTIALS)
            .bind(&credentials.email)
            .bind(&credentials.password)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| read_error(&e, "look up employee credentials"))?
            .as_ref()
            .map(mappers::parse_employee_from_row)
            .transpose()
    }

    async fn employee_cpf_exists(&self, cpf: &str) -> AppResult<bool> {
        sqlx::query_scalar(queries::EMPLOYEE_CPF_EXISTS)
            .bind(cpf)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| read_error(&e, "check employee CPF"))
    }

    async fn create_employee(&self, employee: &NewEmployee) -> AppResult<Employee> {
        let row = sqlx::query(queries::INSERT_EMPLOYEE)
            .bind(&employee.name)
            .bind(&employee.password)
            .bind(&employee.email)
            .bind(&employee.cpf)
            .bind(employee.role.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| write_error(&e, "create employee", EMPLOYEE_CONFLICT))?;
        mappers::parse_employee_from_row(&row)
    }

    async fn update_employee(&self, id: i64, update: &EmployeeUpdate) -> AppResult<bool> {
        let result = sqlx::query(queries::UPDATE_EMPLOYEE)
            .bind(&update.name)
            .bind(&update.email)
            .bind(&update.cpf)
            .bind(update.role.as_deref())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(&e, "update employee", EMPLOYEE_CONFLICT))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_employee(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query(queries::DELETE_EMPLOYEE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete employee: {e}")))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_motorcycles(&self) -> AppResult<i64> {
        sqlx::query_scalar(queries::COUNT_MOTORCYCLES)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| read_error(&e, "count motorcycles"))
    }

    async fn list_motorcycles(&self, offset: i64, limit: i64) -> AppResult<Vec<Motorcycle>> {
        let rows = sqlx::query(queries::LIST_MOTORCYCLES)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| read_error(&e, "list motorcycles"))?;
        rows.iter().map(mappers::parse_motorcycle_from_row).collect()
    }

    async fn find_motorcycle(&self, lookup: &MotorcycleLookup) -> AppResult<Option<Motorcycle>> {
        sqlx::query(queries::FIND_MOTORCYCLE)
            .bind(lookup.chassis())
            .bind(lookup.plate())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| read_error(&e, "find motorcycle"))?
            .as_ref()
            .map(mappers::parse_motorcycle_from_row)
            .transpose()
    }

    async fn motorcycle_chassis_exists(&self, chassis: &str) -> AppResult<bool> {
        sqlx::query_scalar(queries::MOTORCYCLE_CHASSIS_EXISTS)
            .bind(chassis)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| read_error(&e, "check motorcycle chassis"))
    }

    async fn motorcycle_plate_exists(&self, plate: &str) -> AppResult<bool> {
        sqlx::query_scalar(queries::MOTORCYCLE_PLATE_EXISTS)
            .bind(plate)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| read_error(&e, "check motorcycle plate"))
    }

    async fn get_motorcycle(&self, key: &MotorcycleKey) -> AppResult<Option<Motorcycle>> {
        sqlx::query(queries::GET_MOTORCYCLE)
            .bind(&key.chassis)
            .bind(&key.plate)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| read_error(&e, "get motorcycle"))?
            .as_ref()
            .map(mappers::parse_motorcycle_from_row)
            .transpose()
    }

    async fn create_motorcycle(&self, motorcycle: &Motorcycle) -> AppResult<()> {
        sqlx::query(queries::INSERT_MOTORCYCLE)
            .bind(&motorcycle.chassis)
            .bind(&motorcycle.plate)
            .bind(motorcycle.slot_id)
            .bind(&motorcycle.model)
            .bind(motorcycle.status)
            .bind(motorcycle.description.as_deref())
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(&e, "create motorcycle", MOTORCYCLE_CONFLICT))?;
        Ok(())
    }

    async fn update_motorcycle(
        &self,
        key: &MotorcycleKey,
        update: &MotorcycleUpdate,
    ) -> AppResult<bool> {
        let result = sqlx::query(queries::UPDATE_MOTORCYCLE)
            .bind(update.slot_id)
            .bind(&update.model)
            .bind(update.status)
            .bind(update.description.as_deref())
            .bind(&key.chassis)
            .bind(&key.plate)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update motorcycle: {e}")))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_motorcycle(&self, key: &MotorcycleKey) -> AppResult<bool> {
        let result = sqlx::query(queries::DELETE_MOTORCYCLE)
            .bind(&key.chassis)
            .bind(&key.plate)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete motorcycle: {e}")))?;
        Ok(result.rows_affected() > 0)
    }
}
