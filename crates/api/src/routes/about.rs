//! About content endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use persistence::repositories::AboutContentRepository;
use std::str::FromStr;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::about::UpdateAboutContentRequest;
use domain::models::{AboutContent, AboutSection};

/// List every section in section-key order.
///
/// GET /api/v1/about
pub async fn list_sections(
    State(state): State<AppState>,
) -> Result<Json<Vec<AboutContent>>, ApiError> {
    let repo = AboutContentRepository::new(state.pool.clone());
    let sections: Vec<AboutContent> = repo
        .find_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(sections))
}

/// Fetch one section.
///
/// GET /api/v1/about/:section
pub async fn get_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<AboutContent>, ApiError> {
    let section = AboutSection::from_str(&section).map_err(ApiError::Validation)?;

    let repo = AboutContentRepository::new(state.pool.clone());
    let entity = repo
        .find_by_section(section.into())
        .await?
        .ok_or_else(|| ApiError::NotFound("Section not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// Write a section: insert on first write, replace afterwards.
///
/// PUT /api/v1/about/:section (admin)
pub async fn upsert_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(request): Json<UpdateAboutContentRequest>,
) -> Result<Json<AboutContent>, ApiError> {
    let section = AboutSection::from_str(&section).map_err(ApiError::Validation)?;
    request.validate()?;

    let repo = AboutContentRepository::new(state.pool.clone());
    let entity = repo
        .upsert(section.into(), &request.title, &request.content)
        .await?;

    let content: AboutContent = entity.into();
    info!(section = %content.section, "About section written");

    Ok(Json(content))
}
