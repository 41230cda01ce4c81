//! Admin console authentication routes.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::admin_auth::{AdminAuthError, AdminAuthService};

/// Request body for admin login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin identity in responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// Token information in responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Response body for successful admin login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    pub admin: AdminResponse,
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

fn map_auth_error(e: AdminAuthError) -> ApiError {
    match e {
        AdminAuthError::InvalidCredentials => {
            ApiError::Unauthorized("Invalid username or password".to_string())
        }
        AdminAuthError::InvalidRefreshToken => {
            ApiError::Unauthorized("Invalid or expired refresh token".to_string())
        }
        AdminAuthError::DatabaseError(db_err) => ApiError::from(db_err),
        AdminAuthError::PasswordError(e) => ApiError::Internal(format!("Password error: {}", e)),
        AdminAuthError::TokenError(e) => ApiError::Internal(format!("Token error: {}", e)),
    }
}

/// Admin login.
///
/// POST /api/v1/admin/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, ApiError> {
    request.validate()?;

    let service = AdminAuthService::new(state.pool.clone(), state.jwt.clone());
    let result = service
        .login(&request.username, &request.password)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(AdminLoginResponse {
        admin: AdminResponse {
            id: result.admin_id.to_string(),
            username: result.username,
            role: "admin".to_string(),
        },
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
/// POST /api/v1/admin/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    request.validate()?;

    let service = AdminAuthService::new(state.pool.clone(), state.jwt.clone());
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
/// POST /api/v1/admin/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;

    let service = AdminAuthService::new(state.pool.clone(), state.jwt.clone());
    service
        .logout(&request.refresh_token)
        .await
        .map_err(map_auth_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let valid = AdminLoginRequest {
            username: "admin".to_string(),
            password: "Secret1pass".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = AdminLoginRequest {
            username: String::new(),
            password: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_tokens_response_serializes_camel_case() {
        let tokens = TokensResponse {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
        };
        let json = serde_json::to_string(&tokens).unwrap();
        assert!(json.contains("\"accessToken\""));
        assert!(json.contains("\"refreshToken\""));
        assert!(json.contains("\"expiresIn\":3600"));
    }
}
