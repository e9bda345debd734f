// ABOUTME: axum IntoResponse implementation for AppError
// ABOUTME: Maps error codes to status codes, logs server-side failures, and exposes the envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use super::{AppError, ErrorResponse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{debug, error};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = ?self.code, message = %self.message, "Request failed");
        } else {
            debug!(code = ?self.code, message = %self.message, "Request rejected");
        }

        // The envelope rides along so outer middleware can add the request id
        let envelope = ErrorResponse::from(self);
        let mut response = (status, Json(envelope.clone())).into_response();
        response.extensions_mut().insert(envelope);
        response
    }
}
