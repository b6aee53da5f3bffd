//! Generation Route
//!
//! Proxy endpoint for AI text generation. Nothing is persisted here;
//! the caller decides whether to save the result via POST /api/content.
//!
//! - POST /api/generate - Generate text for a prompt

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{GenerateRequest, GenerateResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/generate
///
/// Forward a prompt to the generation service and return the produced
/// text. Validation happens before the upstream client is touched, so
/// an empty prompt never issues a network call.
pub async fn generate_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::Validation("prompt cannot be empty".to_string()));
    }

    let generator = state.generator.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("generation service not configured".to_string())
    })?;

    let response = generator.generate_text(&req.prompt, req.kind).await?;

    tracing::info!(kind = %req.kind, chars = response.len(), "Generated text");

    Ok(Json(GenerateResponse { response }))
}
