// ABOUTME: Route module organization for the LugiaTrack HTTP endpoints
// ABOUTME: Employee, motorcycle, health, and optional OpenAPI routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! Route module for the LugiaTrack API
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the service layer.

/// Employee registry routes (/funcionarios)
pub mod employees;
/// Request extractors with JSON error rejections
pub mod extract;
/// Health check and readiness routes
pub mod health;
/// Motorcycle registry routes (/motos)
pub mod motorcycles;
/// `OpenAPI` documentation routes (feature-gated)
#[cfg(feature = "openapi")]
pub mod openapi;

pub use employees::EmployeeRoutes;
pub use health::HealthRoutes;
pub use motorcycles::MotorcycleRoutes;
#[cfg(feature = "openapi")]
pub use openapi::OpenApiRoutes;
