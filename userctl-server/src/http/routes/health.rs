//! Readiness endpoint
//!
//! Pings the pool on every call, so a database outage shows up here as 503
//! rather than only as failing user requests.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::pool::ping;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Readiness response
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health - 200 when the database answers a ping, 503 otherwise
async fn readiness(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadinessResponse>, ApiError> {
    ping(&state.pool).await.map_err(ApiError::Unavailable)?;

    Ok(Json(ReadinessResponse {
        status: "ok",
        database: "reachable",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(readiness))
}
