//! Banner Image API Handlers

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::services::ImageUpload;
use crate::utils::{AppError, AppResult};
use shared::{ApiResponse, BannerImage};

/// GET /api/banner-images - all banners, newest first
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<BannerImage>>>> {
    let banners = state.catalog.list_banners().await?;
    Ok(Json(ApiResponse::ok(banners)))
}

/// POST /api/banner-images - upload a banner (multipart, `image` field)
pub async fn create(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<BannerImage>>)> {
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            let file_name = field
                .file_name()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "banner".to_string());
            let data = field.bytes().await?.to_vec();
            image = Some(ImageUpload { data, file_name });
            break;
        }
    }

    let image = image.ok_or_else(|| AppError::validation("Image file is required"))?;
    let banner = state.catalog.create_banner(image).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(banner))))
}

/// DELETE /api/banner-images/:id - remove banner and its CDN file
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<BannerImage>>> {
    let banner = state.catalog.delete_banner(&id).await?;
    Ok(Json(ApiResponse::ok(banner)))
}
