//! Category API Handlers
//!
//! Renames and deletes cascade into products; see the catalog service.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{CategoryCreate, CategoryUpdate};
use crate::utils::AppResult;
use shared::{ApiResponse, Category, CategoryRename};

/// GET /api/categories - all categories
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = state.catalog.list_categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /api/categories/:id - single category
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = state.catalog.get_category(&id).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// POST /api/categories - create category
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Category>>)> {
    let category = state.catalog.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}

/// PUT /api/categories/:id - rename category
///
/// Returns both the old and the new record so clients can tell what
/// the rename cascaded from.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<ApiResponse<CategoryRename>>> {
    let rename = state.catalog.rename_category(&id, payload).await?;
    Ok(Json(ApiResponse::ok(rename)))
}

/// DELETE /api/categories/:id - delete category, products move to "Uncategorized"
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = state.catalog.delete_category(&id).await?;
    Ok(Json(ApiResponse::ok(category)))
}
