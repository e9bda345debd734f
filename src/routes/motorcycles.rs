// ABOUTME: Route handlers for the motorcycle registry REST API (/motos)
// ABOUTME: Paginated listing, chassis-or-plate lookup and delete, and keyed updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use lugiatrack_core::errors::AppError;
use lugiatrack_core::pagination::{Page, PageRequest};
use serde::{Deserialize, Serialize};

use super::employees::ListQuery;
use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::{Motorcycle, MotorcycleKey, MotorcycleLookup};
use crate::resources::ServerResources;
use crate::services::motorcycles;

/// Motorcycle read representation (slot id is write-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MotorcycleResponse {
    /// 17-character chassis number
    #[serde(rename = "chassi")]
    pub chassis: String,
    /// 7-character plate
    #[serde(rename = "placa")]
    pub plate: String,
    /// Model name
    #[serde(rename = "modelo")]
    pub model: String,
    /// Availability code
    pub status: i32,
    /// Free-text notes
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

impl From<Motorcycle> for MotorcycleResponse {
    fn from(motorcycle: Motorcycle) -> Self {
        Self {
            chassis: motorcycle.chassis,
            plate: motorcycle.plate,
            model: motorcycle.model,
            status: motorcycle.status,
            description: motorcycle.description,
        }
    }
}

/// Body for POST /motos and PUT /motos/:chassi/:placa
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct MotorcycleBody {
    /// 17-character chassis number
    pub chassi: String,
    /// 7-character plate
    pub placa: String,
    /// Parking slot
    pub id_vaga: i32,
    /// Model name
    pub modelo: String,
    /// Availability code
    pub status: i32,
    /// Free-text notes
    pub descricao: Option<String>,
}

impl From<MotorcycleBody> for Motorcycle {
    fn from(body: MotorcycleBody) -> Self {
        Self {
            chassis: body.chassi,
            plate: body.placa,
            slot_id: body.id_vaga,
            model: body.modelo,
            status: body.status,
            description: body.descricao,
        }
    }
}

/// Query parameters for lookup and delete
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LookupQuery {
    /// Chassis filter
    pub chassi: Option<String>,
    /// Plate filter
    pub placa: Option<String>,
}

impl From<LookupQuery> for MotorcycleLookup {
    fn from(query: LookupQuery) -> Self {
        Self::new(query.chassi, query.placa)
    }
}

/// `/motos/{chassis}/{plate}` with each segment percent-encoded
fn motorcycle_location(key: &MotorcycleKey) -> Result<HeaderValue, AppError> {
    let location = format!(
        "/motos/{}/{}",
        urlencoding::encode(&key.chassis),
        urlencoding::encode(&key.plate)
    );
    HeaderValue::from_str(&location)
        .map_err(|e| AppError::internal(format!("Invalid Location header: {e}")))
}

/// Motorcycle routes handler
pub struct MotorcycleRoutes;

impl MotorcycleRoutes {
    /// Create all motorcycle routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/motos",
                get(Self::handle_list)
                    .post(Self::handle_create)
                    .delete(Self::handle_delete),
            )
            .route("/motos/buscar", get(Self::handle_find))
            .route("/motos/:chassi/:placa", put(Self::handle_update))
            .with_state(resources)
    }

    /// Handle GET /motos - Paginated list ordered by chassis
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        ApiQuery(query): ApiQuery<ListQuery>,
    ) -> Result<Response, AppError> {
        let request = PageRequest::from_query(query.page, query.page_size)?;
        let page: Page<MotorcycleResponse> =
            motorcycles::list_motorcycles(&resources.database, request)
                .await?
                .map(MotorcycleResponse::from);
        Ok((StatusCode::OK, Json(page)).into_response())
    }

    /// Handle GET /motos/buscar - First match on chassis OR plate
    async fn handle_find(
        State(resources): State<Arc<ServerResources>>,
        ApiQuery(query): ApiQuery<LookupQuery>,
    ) -> Result<Response, AppError> {
        let motorcycle =
            motorcycles::find_motorcycle(&resources.database, &query.into()).await?;
        Ok((StatusCode::OK, Json(MotorcycleResponse::from(motorcycle))).into_response())
    }

    /// Handle POST /motos - Register a motorcycle
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<MotorcycleBody>,
    ) -> Result<Response, AppError> {
        let motorcycle: Motorcycle = body.into();
        let location = motorcycle_location(&motorcycle.key())?;
        motorcycles::create_motorcycle(&resources.database, &motorcycle).await?;

        Ok((
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(MotorcycleResponse::from(motorcycle)),
        )
            .into_response())
    }

    /// Handle PUT /motos/:chassi/:placa - Full replace of the non-key fields
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        ApiPath((chassis, plate)): ApiPath<(String, String)>,
        ApiJson(body): ApiJson<MotorcycleBody>,
    ) -> Result<Response, AppError> {
        let key = MotorcycleKey { chassis, plate };
        motorcycles::update_motorcycle(&resources.database, &key, &body.into()).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle DELETE /motos - Delete the first match on chassis OR plate
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        ApiQuery(query): ApiQuery<LookupQuery>,
    ) -> Result<Response, AppError> {
        motorcycles::delete_motorcycle(&resources.database, &query.into()).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
