//! Club endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::ClubRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::club::{
    CreateClubRequest, ListClubsResponse, UpdateClubRequest, DEFAULT_CLUB_LOGO_URL,
};
use domain::models::Club;

/// List all clubs ordered by name, each with its derived player count.
/// A single grouped query computes every count.
///
/// GET /api/v1/clubs
pub async fn list_clubs(State(state): State<AppState>) -> Result<Json<ListClubsResponse>, ApiError> {
    let repo = ClubRepository::new(state.pool.clone());
    let clubs: Vec<Club> = repo
        .find_all_with_counts()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let count = clubs.len();
    Ok(Json(ListClubsResponse { data: clubs, count }))
}

/// Fetch a single club with its player count.
///
/// GET /api/v1/clubs/:id
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Club>, ApiError> {
    let repo = ClubRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id_with_count(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// Create a club.
///
/// POST /api/v1/clubs (admin)
pub async fn create_club(
    State(state): State<AppState>,
    Json(request): Json<CreateClubRequest>,
) -> Result<(StatusCode, Json<Club>), ApiError> {
    request.validate()?;

    let repo = ClubRepository::new(state.pool.clone());
    let logo = request
        .logo
        .unwrap_or_else(|| DEFAULT_CLUB_LOGO_URL.to_string());
    let entity = repo
        .create(&request.name, &request.location, request.founded_year, &logo)
        .await?;

    let club = entity.into_club(0);
    info!(club_id = %club.id, name = %club.name, "Club created");

    Ok((StatusCode::CREATED, Json(club)))
}

/// Update a club.
///
/// PUT /api/v1/clubs/:id (admin)
pub async fn update_club(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClubRequest>,
) -> Result<Json<Club>, ApiError> {
    request.validate()?;

    let repo = ClubRepository::new(state.pool.clone());
    let logo = request
        .logo
        .unwrap_or_else(|| DEFAULT_CLUB_LOGO_URL.to_string());
    let entity = repo
        .update(id, &request.name, &request.location, request.founded_year, &logo)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    // Re-read through the counting query so the response carries the
    // current player count.
    let with_count = repo
        .find_by_id_with_count(entity.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    let club: Club = with_count.into();
    info!(club_id = %club.id, "Club updated");

    Ok(Json(club))
}

/// Delete a club. Refused with a conflict while any player is registered
/// to it; check and delete run in one transaction.
///
/// DELETE /api/v1/clubs/:id (admin)
pub async fn delete_club(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = ClubRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Club not found".to_string()));
    }

    info!(club_id = %id, "Club deleted");
    Ok(StatusCode::NO_CONTENT)
}
