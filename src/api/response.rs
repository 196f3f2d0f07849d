//! Response types for the EOSB Calculation Engine API.
//!
//! Every endpoint wraps its payload in the uniform
//! `{success, data?, message, error?}` envelope; this module defines that
//! envelope and the mapping from engine errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The uniform response envelope for all API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was handled successfully.
    pub success: bool,
    /// The payload; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable status message.
    pub message: String,
    /// Error detail for programmatic handling; absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response carrying `data`.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
        }
    }

    /// Creates a failure response with a message and error detail.
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// Payload of the `/api/eosb/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Service liveness indicator.
    pub status: String,
    /// The time the probe was answered.
    pub timestamp: DateTime<Utc>,
}

/// An error envelope with its HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error envelope body.
    pub body: ApiResponse<()>,
}

impl ApiErrorResponse {
    /// Creates a 400 validation failure response.
    pub fn validation(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiResponse::failure("Invalid request", error),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                body: ApiResponse::failure("Invalid request", error.to_string()),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: ApiResponse::failure("Configuration error", error.to_string()),
                }
            }
            EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: ApiResponse::failure("Calculation failed", error.to_string()),
            },
        }
    }
}
