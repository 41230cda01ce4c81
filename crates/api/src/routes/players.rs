//! Player endpoint handlers.
//!
//! The public surface (search, lookup) only ever sees active players; the
//! admin surface manages the full roster including disabled players.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{NewPlayer, PlayerRepository, PlayerUpdate};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::player::{
    CreatePlayerRequest, ListPlayersResponse, SearchPlayersQuery, SetPlayerStatusRequest,
    UpdatePlayerRequest, DEFAULT_PLAYER_PHOTO_URL,
};
use domain::models::Player;

/// List every player, newest first, disabled ones included.
///
/// GET /api/v1/players (admin)
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<ListPlayersResponse>, ApiError> {
    let repo = PlayerRepository::new(state.pool.clone());
    let players: Vec<Player> = repo.find_all().await?.into_iter().map(Into::into).collect();

    let count = players.len();
    Ok(Json(ListPlayersResponse {
        data: players,
        count,
    }))
}

/// Public search across active players.
///
/// An empty (or absent) query returns all active players; otherwise the
/// match is a case-insensitive substring of the name or league ID.
/// Disabled players are never returned here.
///
/// GET /api/v1/players/search?q=
pub async fn search_players(
    State(state): State<AppState>,
    Query(query): Query<SearchPlayersQuery>,
) -> Result<Json<ListPlayersResponse>, ApiError> {
    let repo = PlayerRepository::new(state.pool.clone());
    let q = query.q.unwrap_or_default();
    let players: Vec<Player> = repo
        .search_active(q.trim())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let count = players.len();
    Ok(Json(ListPlayersResponse {
        data: players,
        count,
    }))
}

/// Fetch a single player (public verification page).
///
/// GET /api/v1/players/:id
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Player>, ApiError> {
    let repo = PlayerRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// List the players registered to one club.
///
/// GET /api/v1/clubs/:id/players
pub async fn list_club_players(
    State(state): State<AppState>,
    Path(club_id): Path<Uuid>,
) -> Result<Json<ListPlayersResponse>, ApiError> {
    let repo = PlayerRepository::new(state.pool.clone());
    let players: Vec<Player> = repo
        .find_by_club(club_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let count = players.len();
    Ok(Json(ListPlayersResponse {
        data: players,
        count,
    }))
}

/// Register a new player. The league ID is assigned atomically inside the
/// insert transaction; status starts as active.
///
/// POST /api/v1/players (admin)
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    request.validate()?;

    let repo = PlayerRepository::new(state.pool.clone());
    let entity = repo
        .create(NewPlayer {
            name: request.name,
            date_of_birth: request.date_of_birth,
            position: request.position.into(),
            club_id: request.club_id,
            verified: request.verified.unwrap_or(false),
            photo_url: request
                .photo_url
                .unwrap_or_else(|| DEFAULT_PLAYER_PHOTO_URL.to_string()),
        })
        .await?;

    let player: Player = entity.into();
    info!(
        player_id = %player.id,
        league_id = %player.league_id,
        "Player registered"
    );

    Ok((StatusCode::CREATED, Json(player)))
}

/// Update a player's editable fields. The league ID is not part of the
/// payload and stays untouched.
///
/// PUT /api/v1/players/:id (admin)
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePlayerRequest>,
) -> Result<Json<Player>, ApiError> {
    request.validate()?;

    let repo = PlayerRepository::new(state.pool.clone());
    let entity = repo
        .update(
            id,
            PlayerUpdate {
                name: request.name,
                date_of_birth: request.date_of_birth,
                position: request.position.into(),
                club_id: request.club_id,
                verified: request.verified.unwrap_or(false),
                photo_url: request
                    .photo_url
                    .unwrap_or_else(|| DEFAULT_PLAYER_PHOTO_URL.to_string()),
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))?;

    let player: Player = entity.into();
    info!(player_id = %player.id, "Player updated");

    Ok(Json(player))
}

/// Set a player's status. No transition check: either status may be set
/// from either status, so toggling twice restores the original.
///
/// PATCH /api/v1/players/:id/status (admin)
pub async fn set_player_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetPlayerStatusRequest>,
) -> Result<Json<Player>, ApiError> {
    let repo = PlayerRepository::new(state.pool.clone());
    let entity = repo
        .set_status(id, request.status.into())
        .await?
        .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))?;

    let player: Player = entity.into();
    info!(
        player_id = %player.id,
        status = %player.status,
        "Player status changed"
    );

    Ok(Json(player))
}

/// Delete a player unconditionally.
///
/// DELETE /api/v1/players/:id (admin)
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = PlayerRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Player not found".to_string()));
    }

    info!(player_id = %id, "Player deleted");
    Ok(StatusCode::NO_CONTENT)
}
