//! Health Routes
//!
//! Liveness, readiness and full health status.
//!
//! - GET /health/live - Process is up
//! - GET /health/ready - Library is reachable
//! - GET /health - Full status with uptime and counts

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, ProbeResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "ok".to_string(),
    })
}

/// GET /health/ready
///
/// Ready when the content library answers a query.
pub async fn readiness(State(state): State<Arc<AppState>>) -> ApiResult<Json<ProbeResponse>> {
    state.library.total_count().await?;

    Ok(Json(ProbeResponse {
        status: "ready".to_string(),
    }))
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    let content_items = state.library.total_count().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        content_items,
        generation_enabled: state.has_generator(),
    }))
}
