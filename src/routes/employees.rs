// ABOUTME: Route handlers for the employee registry REST API (/funcionarios)
// ABOUTME: Paginated listing, lookup by id, plaintext login, and full-replace CRUD
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! Employee routes
//!
//! Wire field names follow the registry's Portuguese column naming
//! (`nome`, `senha`, `cargo`). The password is accepted on create and login
//! only and never appears in a response.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use lugiatrack_core::errors::AppError;
use lugiatrack_core::pagination::{Page, PageRequest};
use serde::{Deserialize, Serialize};

use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::{Employee, EmployeeCredentials, EmployeeUpdate, NewEmployee};
use crate::resources::ServerResources;
use crate::services::employees;

/// Employee read representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployeeResponse {
    /// Storage-assigned identifier
    #[serde(rename = "id_funcionario")]
    pub id: i64,
    /// Full name
    #[serde(rename = "nome")]
    pub name: String,
    /// Contact email
    pub email: String,
    /// 11-digit CPF
    pub cpf: String,
    /// Job title
    #[serde(rename = "cargo")]
    pub role: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            cpf: employee.cpf,
            role: employee.role,
        }
    }
}

/// Body for POST /funcionarios
#[derive(Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct CreateEmployeeBody {
    /// Full name
    pub nome: String,
    /// Plaintext password
    pub senha: String,
    /// Contact email
    pub email: String,
    /// 11-digit CPF
    pub cpf: String,
    /// Job title
    pub cargo: Option<String>,
}

impl From<CreateEmployeeBody> for NewEmployee {
    fn from(body: CreateEmployeeBody) -> Self {
        Self {
            name: body.nome,
            password: body.senha,
            email: body.email,
            cpf: body.cpf,
            role: body.cargo,
        }
    }
}

/// Body for PUT /funcionarios/:id
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct UpdateEmployeeBody {
    /// Full name
    pub nome: String,
    /// Contact email
    pub email: String,
    /// 11-digit CPF
    pub cpf: String,
    /// Job title
    pub cargo: Option<String>,
}

impl From<UpdateEmployeeBody> for EmployeeUpdate {
    fn from(body: UpdateEmployeeBody) -> Self {
        Self {
            name: body.nome,
            email: body.email,
            cpf: body.cpf,
            role: body.cargo,
        }
    }
}

/// Body for POST /funcionarios/login
#[derive(Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct LoginBody {
    /// Login email
    pub email: String,
    /// Plaintext password
    pub senha: String,
}

/// Query parameters for list endpoints
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListQuery {
    /// 1-based page (default 1)
    pub page: Option<i64>,
    /// Rows per page (default 10)
    #[serde(rename = "pageSize")]
    pub page_size: Option<i64>,
}

/// Employee routes handler
pub struct EmployeeRoutes;

impl EmployeeRoutes {
    /// Create all employee routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/funcionarios",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/funcionarios/login", post(Self::handle_login))
            .route(
                "/funcionarios/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /funcionarios - Paginated list ordered by id
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        ApiQuery(query): ApiQuery<ListQuery>,
    ) -> Result<Response, AppError> {
        let request = PageRequest::from_query(query.page, query.page_size)?;
        let page: Page<EmployeeResponse> = employees::list_employees(&resources.database, request)
            .await?
            .map(EmployeeResponse::from);
        Ok((StatusCode::OK, Json(page)).into_response())
    }

    /// Handle GET /funcionarios/:id - Single employee
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        ApiPath(id): ApiPath<i64>,
    ) -> Result<Response, AppError> {
        let employee = employees::get_employee(&resources.database, id).await?;
        Ok((StatusCode::OK, Json(EmployeeResponse::from(employee))).into_response())
    }

    /// Handle POST /funcionarios/login - Credential check
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<LoginBody>,
    ) -> Result<Response, AppError> {
        let credentials = EmployeeCredentials {
            email: body.email,
            password: body.senha,
        };
        let employee = employees::login(&resources.database, &credentials).await?;
        Ok((StatusCode::OK, Json(EmployeeResponse::from(employee))).into_response())
    }

    /// Handle POST /funcionarios - Register an employee
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<CreateEmployeeBody>,
    ) -> Result<Response, AppError> {
        let created = employees::create_employee(&resources.database, &body.into()).await?;
        let location = HeaderValue::from_str(&format!("/funcionarios/{}", created.id))
            .map_err(|e| AppError::internal(format!("Invalid Location header: {e}")))?;
        Ok((
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(EmployeeResponse::from(created)),
        )
            .into_response())
    }

    /// Handle PUT /funcionarios/:id - Full replace (password excluded)
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        ApiPath(id): ApiPath<i64>,
        ApiJson(body): ApiJson<UpdateEmployeeBody>,
    ) -> Result<Response, AppError> {
        employees::update_employee(&resources.database, id, &body.into()).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle DELETE /funcionarios/:id - Hard delete
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        ApiPath(id): ApiPath<i64>,
    ) -> Result<Response, AppError> {
        employees::delete_employee(&resources.database, id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
