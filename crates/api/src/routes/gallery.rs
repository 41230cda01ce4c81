//! Gallery endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::GalleryRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::gallery::{
    CreateGalleryImageRequest, ListGalleryResponse, UpdateGalleryImageRequest,
};
use domain::models::GalleryImage;

/// List all images in display order.
///
/// GET /api/v1/gallery
pub async fn list_images(
    State(state): State<AppState>,
) -> Result<Json<ListGalleryResponse>, ApiError> {
    let repo = GalleryRepository::new(state.pool.clone());
    let images: Vec<GalleryImage> = repo
        .find_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let count = images.len();
    Ok(Json(ListGalleryResponse {
        data: images,
        count,
    }))
}

/// Fetch a single image.
///
/// GET /api/v1/gallery/:id
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GalleryImage>, ApiError> {
    let repo = GalleryRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Gallery image not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// Add an image. The order index defaults to 0 when absent; duplicates
/// are allowed.
///
/// POST /api/v1/gallery (admin)
pub async fn create_image(
    State(state): State<AppState>,
    Json(request): Json<CreateGalleryImageRequest>,
) -> Result<(StatusCode, Json<GalleryImage>), ApiError> {
    request.validate()?;

    let repo = GalleryRepository::new(state.pool.clone());
    let entity = repo
        .create(
            &request.title,
            request.description.as_deref(),
            &request.image_url,
            request.category.into(),
            request.order_index.unwrap_or(0),
        )
        .await?;

    let image: GalleryImage = entity.into();
    info!(image_id = %image.id, title = %image.title, "Gallery image added");

    Ok((StatusCode::CREATED, Json(image)))
}

/// Update an image.
///
/// PUT /api/v1/gallery/:id (admin)
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateGalleryImageRequest>,
) -> Result<Json<GalleryImage>, ApiError> {
    request.validate()?;

    let repo = GalleryRepository::new(state.pool.clone());
    let entity = repo
        .update(
            id,
            &request.title,
            request.description.as_deref(),
            &request.image_url,
            request.category.into(),
            request.order_index.unwrap_or(0),
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Gallery image not found".to_string()))?;

    let image: GalleryImage = entity.into();
    info!(image_id = %image.id, "Gallery image updated");

    Ok(Json(image))
}

/// Delete an image.
///
/// DELETE /api/v1/gallery/:id (admin)
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = GalleryRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Gallery image not found".to_string()));
    }

    info!(image_id = %id, "Gallery image deleted");
    Ok(StatusCode::NO_CONTENT)
}
