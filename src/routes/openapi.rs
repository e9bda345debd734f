// ABOUTME: OpenAPI documentation endpoint with Swagger UI for the LugiaTrack API
// ABOUTME: Provides machine-readable API document at /api-docs/openapi.json and interactive docs at /swagger-ui
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! `OpenAPI` documentation routes

use axum::Router;
use lugiatrack_core::pagination::Page;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::routes::employees::{
    CreateEmployeeBody, EmployeeResponse, ListQuery, LoginBody, UpdateEmployeeBody,
};
use crate::routes::health::HealthResponse;
use crate::routes::motorcycles::{LookupQuery, MotorcycleBody, MotorcycleResponse};

/// `OpenAPI` documentation for the LugiaTrack API
///
/// Handlers are associated functions, which path annotations cannot target,
/// so only schemas are generated.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LugiaTrack API",
        version = "0.1.0",
        description = "Employee and motorcycle registry for parking-yard operations",
        license(name = "MIT OR Apache-2.0")
    ),
    tags(
        (name = "funcionarios", description = "Employee registry and login"),
        (name = "motos", description = "Motorcycle registry")
    ),
    components(
        schemas(
            EmployeeResponse,
            CreateEmployeeBody,
            UpdateEmployeeBody,
            LoginBody,
            ListQuery,
            Page<EmployeeResponse>,
            MotorcycleResponse,
            MotorcycleBody,
            LookupQuery,
            Page<MotorcycleResponse>,
            HealthResponse,
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// `OpenAPI` routes provider
pub struct OpenApiRoutes;

impl OpenApiRoutes {
    /// Create `OpenAPI` documentation routes
    ///
    /// Provides:
    /// - `/swagger-ui` - Interactive Swagger UI documentation
    /// - `/api-docs/openapi.json` - Raw `OpenAPI` JSON document
    pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    }
}
