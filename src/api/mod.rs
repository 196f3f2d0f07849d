//! HTTP API for the EOSB Calculation Engine.
//!
//! The core engine is a local function call; this module wires it into an
//! axum service boundary exposing calculate, config, and health endpoints
//! under `/api/eosb`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculateRequest;
pub use response::{ApiErrorResponse, ApiResponse, HealthStatus};
pub use state::AppState;
