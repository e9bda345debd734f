// ABOUTME: HTTP middleware for the LugiaTrack API
// ABOUTME: CORS policy and request-id correlation layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

/// CORS configuration
pub mod cors;

/// Request-id generation, request spans, and error correlation
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{attach_request_id, make_request_span, MakeRequestUuid, REQUEST_ID_HEADER};
