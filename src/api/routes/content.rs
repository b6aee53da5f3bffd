//! Content Routes
//!
//! CRUD endpoints for the caller's content collection.
//!
//! - GET /api/content - List all items for the caller
//! - POST /api/content - Create an item
//! - DELETE /api/content/:id - Delete an item
//!
//! Items are never updated in place; the only mutations are create and
//! delete.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::auth::Owner;
use crate::api::dto::{ContentListResponse, CreateContentRequest, DeleteContentResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/content
///
/// List every content item belonging to the authenticated caller, in
/// insertion order.
pub async fn list_content(
    State(state): State<Arc<AppState>>,
    owner: Owner,
) -> ApiResult<Json<ContentListResponse>> {
    let items = state.library.list_for_owner(&owner.0).await?;

    Ok(Json(ContentListResponse {
        total: items.len(),
        items,
    }))
}

/// POST /api/content
///
/// Persist one content item. Both payload fields are required; an
/// empty prompt or response is rejected before touching the library.
pub async fn create_content(
    State(state): State<Arc<AppState>>,
    owner: Owner,
    Json(req): Json<CreateContentRequest>,
) -> ApiResult<(StatusCode, Json<crate::store::ContentItem>)> {
    if req.data.prompt.trim().is_empty() {
        return Err(ApiError::Validation("prompt is required".to_string()));
    }
    if req.data.response.trim().is_empty() {
        return Err(ApiError::Validation("response is required".to_string()));
    }

    let item = state.library.insert(&owner.0, req.kind, req.data).await?;

    tracing::info!(item_id = %item.id, kind = %item.kind, "Created content item");

    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/content/:id
///
/// Remove one item by id. Deleting an id that does not exist for this
/// caller is a 404, not a silent no-op.
pub async fn delete_content(
    State(state): State<Arc<AppState>>,
    owner: Owner,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteContentResponse>> {
    state.library.delete(&owner.0, &id).await?;

    tracing::info!(item_id = %id, "Deleted content item");

    Ok(Json(DeleteContentResponse { deleted: id }))
}
