//! Admin console authentication service.
//!
//! Credentials live in the admin_users table as Argon2id hashes and every
//! session is server-verified; there is no fixed credential list and no
//! trust-on-read client-side flag.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use persistence::repositories::{AdminUserRepository, AuthSessionRepository};
use shared::crypto::sha256_hex;
use shared::jwt::{extract_subject_id, JwtConfig, JwtError, TokenRole};
use shared::password::{verify_password, PasswordError};

/// Errors that can occur during admin authentication.
#[derive(Debug, Error)]
pub enum AdminAuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token error: {0}")]
    TokenError(#[from] JwtError),

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Result of a successful admin authentication.
#[derive(Debug, Clone)]
pub struct AdminAuthResult {
    pub admin_id: Uuid,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_in: i64,
}

/// Result of a successful token refresh.
#[derive(Debug, Clone)]
pub struct AdminRefreshResult {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// Authentication service for the admin console.
#[derive(Clone)]
pub struct AdminAuthService {
    admins: AdminUserRepository,
    sessions: AuthSessionRepository,
    jwt: Arc<JwtConfig>,
}

impl AdminAuthService {
    /// Creates a new AdminAuthService.
    pub fn new(pool: PgPool, jwt: Arc<JwtConfig>) -> Self {
        Self {
            admins: AdminUserRepository::new(pool.clone()),
            sessions: AuthSessionRepository::new(pool),
            jwt,
        }
    }

    /// Login with username and password.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminAuthResult, AdminAuthError> {
        let admin = self
            .admins
            .find_by_username(username)
            .await?
            .ok_or(AdminAuthError::InvalidCredentials)?;

        let is_valid = verify_password(password, &admin.password_hash)?;
        if !is_valid {
            return Err(AdminAuthError::InvalidCredentials);
        }

        self.admins.touch_last_login(admin.id).await?;

        let (access_token, refresh_token) = self.issue_session(admin.id).await?;

        Ok(AdminAuthResult {
            admin_id: admin.id,
            username: admin.username,
            access_token,
            refresh_token,
            access_token_expires_in: self.jwt.access_token_expiry_secs,
        })
    }

    /// Exchange a valid refresh token for a new token pair. The presented
    /// token's session is revoked; refresh tokens are single-use.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AdminRefreshResult, AdminAuthError> {
        let claims = self
            .jwt
            .validate_refresh_token(refresh_token, TokenRole::Admin)
            .map_err(|_| AdminAuthError::InvalidRefreshToken)?;
        let admin_id = extract_subject_id(&claims).map_err(|_| AdminAuthError::InvalidRefreshToken)?;

        let token_hash = sha256_hex(refresh_token);
        let session = self
            .sessions
            .find_valid_by_token_hash(&token_hash)
            .await?
            .ok_or(AdminAuthError::InvalidRefreshToken)?;

        if session.subject_id != admin_id || session.role != TokenRole::Admin.as_str() {
            return Err(AdminAuthError::InvalidRefreshToken);
        }

        self.sessions.delete_by_token_hash(&token_hash).await?;

        let (access_token, refresh_token) = self.issue_session(admin_id).await?;

        Ok(AdminRefreshResult {
            access_token,
            refresh_token,
            expires_in: self.jwt.access_token_expiry_secs,
        })
    }

    /// Revoke the session behind a refresh token. Unknown tokens are a
    /// no-op: logout is idempotent.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AdminAuthError> {
        let token_hash = sha256_hex(refresh_token);
        self.sessions.delete_by_token_hash(&token_hash).await?;
        Ok(())
    }

    async fn issue_session(&self, admin_id: Uuid) -> Result<(String, String), AdminAuthError> {
        let (access_token, _) = self.jwt.generate_access_token(admin_id, TokenRole::Admin)?;
        let (refresh_token, _) = self.jwt.generate_refresh_token(admin_id, TokenRole::Admin)?;

        let expires_at = Utc::now() + Duration::seconds(self.jwt.refresh_token_expiry_secs);
        self.sessions
            .create(
                admin_id,
                TokenRole::Admin.as_str(),
                &sha256_hex(&refresh_token),
                expires_at,
            )
            .await?;

        Ok((access_token, refresh_token))
    }
}
