//! League official portal authentication routes.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthSubject;
use crate::services::official_auth::{OfficialAuthError, OfficialAuthService};
use domain::models::official::{OfficialLoginRequest, OfficialSignupRequest};
use domain::models::LeagueOfficial;

/// Token information in responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Response body for signup and login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialAuthResponse {
    pub official: LeagueOfficial,
    pub tokens: TokensResponse,
}

/// Request body carrying a refresh token.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Response body for a token refresh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub tokens: TokensResponse,
}

fn map_auth_error(e: OfficialAuthError) -> ApiError {
    match e {
        OfficialAuthError::EmailAlreadyExists => {
            ApiError::Conflict("Email already registered".to_string())
        }
        OfficialAuthError::InvalidCredentials => {
            ApiError::Unauthorized("Invalid email or password".to_string())
        }
        OfficialAuthError::ProfileNotFound => {
            ApiError::NotFound("Official profile not found".to_string())
        }
        OfficialAuthError::InvalidRefreshToken => {
            ApiError::Unauthorized("Invalid or expired refresh token".to_string())
        }
        OfficialAuthError::PasswordError(shared::password::PasswordError::WeakPassword(msg)) => {
            ApiError::Validation(msg)
        }
        OfficialAuthError::PasswordError(e) => ApiError::Internal(format!("Password error: {}", e)),
        OfficialAuthError::TokenError(e) => ApiError::Internal(format!("Token error: {}", e)),
        OfficialAuthError::DatabaseError(db_err) => ApiError::from(db_err),
    }
}

/// Sign up a new league official.
///
/// POST /api/v1/officials/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<OfficialSignupRequest>,
) -> Result<(StatusCode, Json<OfficialAuthResponse>), ApiError> {
    request.validate()?;

    let service = OfficialAuthService::new(
        state.pool.clone(),
        state.jwt.clone(),
        state.session_events.clone(),
    );
    let result = service
        .signup(
            &request.email,
            &request.password,
            &request.name,
            request.position,
            request.phone.as_deref(),
        )
        .await
        .map_err(map_auth_error)?;

    Ok((
        StatusCode::CREATED,
        Json(OfficialAuthResponse {
            official: result.official,
            tokens: TokensResponse {
                access_token: result.access_token,
                refresh_token: result.refresh_token,
                token_type: "Bearer".to_string(),
                expires_in: result.access_token_expires_in,
            },
        }),
    ))
}

/// Login with email and password.
///
/// POST /api/v1/officials/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<OfficialLoginRequest>,
) -> Result<Json<OfficialAuthResponse>, ApiError> {
    request.validate()?;

    let service = OfficialAuthService::new(
        state.pool.clone(),
        state.jwt.clone(),
        state.session_events.clone(),
    );
    let result = service
        .login(&request.email, &request.password)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(OfficialAuthResponse {
        official: result.official,
        tokens: TokensResponse {
            access_token: result.access_token,
            refresh_token: result.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: result.access_token_expires_in,
        },
    }))
}

/// Exchange a refresh token for a new pair.
///
/// POST /api/v1/officials/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    request.validate()?;

    let service = OfficialAuthService::new(
        state.pool.clone(),
        state.jwt.clone(),
        state.session_events.clone(),
    );
    let result = service
        .refresh(&request.refresh_token)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(RefreshResponse {
        tokens: TokensResponse {
            access_token: result.access_token,
            refresh_token: result.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: result.expires_in,
        },
    }))
}

/// Revoke the session behind a refresh token.
///
/// POST /api/v1/officials/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;

    let service = OfficialAuthService::new(
        state.pool.clone(),
        state.jwt.clone(),
        state.session_events.clone(),
    );
    service
        .logout(&request.refresh_token)
        .await
        .map_err(map_auth_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Profile of the authenticated official (session restore).
///
/// GET /api/v1/officials/me
pub async fn me(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthSubject>,
) -> Result<Json<LeagueOfficial>, ApiError> {
    let service = OfficialAuthService::new(
        state.pool.clone(),
        state.jwt.clone(),
        state.session_events.clone(),
    );
    let official = service
        .profile(subject.subject_id)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(official))
}
