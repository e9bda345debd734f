// ABOUTME: Core types and constants for the LugiaTrack registry API
// ABOUTME: Foundation crate with error handling, pagination, and field limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

#![deny(unsafe_code)]

//! # LugiaTrack Core
//!
//! Shared types for the LugiaTrack registry API. This crate changes
//! infrequently, so the main crate gets incremental compilation benefits.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the HTTP error envelope
//! - **constants**: Field limits and pagination defaults
//! - **pagination**: Offset pagination requests and the list response envelope

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Field limits and pagination defaults
pub mod constants;

/// Offset-based pagination for list endpoints
pub mod pagination;
