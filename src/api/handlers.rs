//! HTTP request handlers for the EOSB Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_gratuity;
use crate::config::EosbConfig;
use crate::models::EmployeeInput;

use super::request::CalculateRequest;
use super::response::{ApiErrorResponse, ApiResponse, HealthStatus};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/eosb/calculate", post(calculate_handler))
        .route("/api/eosb/config", get(config_handler))
        .route("/api/eosb/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /api/eosb/calculate.
///
/// Accepts employee input and returns the calculated gratuity result. An
/// ineligible employee is a successful response; only malformed or invalid
/// input is an error.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing EOSB calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let detail = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    body_text
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    format!("Invalid JSON syntax: {}", err)
                }
                JsonRejection::MissingJsonContentType(_) => {
                    "Content-Type must be application/json".to_string()
                }
                _ => "Failed to parse request body".to_string(),
            };
            return ApiErrorResponse::validation(detail).into_response();
        }
    };

    let input: EmployeeInput = request.into();

    // The future-date check lives here at the boundary: it needs a clock,
    // which the pure engine does not carry.
    if input.joining_date > Utc::now().date_naive() {
        warn!(
            correlation_id = %correlation_id,
            joining_date = %input.joining_date,
            "Joining date in the future"
        );
        return ApiErrorResponse::validation(
            "Invalid input field 'joining_date': cannot be in the future",
        )
        .into_response();
    }

    match calculate_gratuity(&input, state.config().rules()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                is_eligible = result.is_eligible,
                gratuity_amount = %result.gratuity_amount,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                Json(ApiResponse::ok(result, "EOSB calculated successfully")),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /api/eosb/config.
///
/// Returns the calculation rules and the valid input enumerations so
/// clients can render their forms from live configuration.
async fn config_handler(State(state): State<AppState>) -> Json<ApiResponse<EosbConfig>> {
    Json(ApiResponse::ok(
        state.config().config().clone(),
        "Configuration retrieved successfully",
    ))
}

/// Handler for GET /api/eosb/health.
async fn health_handler() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::ok(
        HealthStatus {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        },
        "Service is healthy",
    ))
}
