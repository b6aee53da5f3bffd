//! Media Routes
//!
//! Proxy endpoints for speech synthesis and thumbnail rendering. Both
//! return resource URLs hosted by the upstream service.
//!
//! - POST /api/tts - Synthesize speech for a text
//! - POST /api/thumbnail - Render a thumbnail image for a prompt

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{SpeechRequest, SpeechResponse, ThumbnailRequest, ThumbnailResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/tts
pub async fn synthesize_speech(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeechRequest>,
) -> ApiResult<Json<SpeechResponse>> {
    if req.text.trim().is_empty() {
        return Err(ApiError::Validation("text cannot be empty".to_string()));
    }

    let generator = state.generator.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("generation service not configured".to_string())
    })?;

    let audio_url = generator.synthesize_speech(&req.text).await?;

    Ok(Json(SpeechResponse { audio_url }))
}

/// POST /api/thumbnail
pub async fn render_thumbnail(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ThumbnailRequest>,
) -> ApiResult<Json<ThumbnailResponse>> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::Validation("prompt cannot be empty".to_string()));
    }

    let generator = state.generator.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("generation service not configured".to_string())
    })?;

    let image_url = generator.render_thumbnail(&req.prompt).await?;

    Ok(Json(ThumbnailResponse { image_url }))
}
