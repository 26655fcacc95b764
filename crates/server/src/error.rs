// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP error mapping and server startup errors.

use atelier_api::ApiError;
use atelier_persistence::PersistenceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// JSON body returned for every error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind.
    pub error: String,
    /// Human-readable description.
    pub message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// Machine-readable error kind.
    pub kind: &'static str,
    /// The error message.
    pub message: String,
}

impl HttpError {
    /// Creates a 401 error for a missing or malformed actor.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            kind: "authentication_failed",
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.kind.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let (status, kind): (StatusCode, &'static str) = match &err {
            ApiError::AuthenticationFailed { .. } => {
                (StatusCode::UNAUTHORIZED, "authentication_failed")
            }
            ApiError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "unauthorized"),
            ApiError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            ApiError::DomainRuleViolation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "rule_violation")
            }
            ApiError::ResourceNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };
        Self {
            status,
            kind,
            message: err.to_string(),
        }
    }
}

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The database could not be opened or migrated.
    #[error("failed to open database: {0}")]
    Persistence(#[from] PersistenceError),
    /// The bind address is not a valid socket address.
    #[error("invalid bind address '{address}': {source}")]
    InvalidAddress {
        address: String,
        source: std::net::AddrParseError,
    },
    /// Binding or serving failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
