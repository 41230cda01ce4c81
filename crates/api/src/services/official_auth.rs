//! League official authentication service.
//!
//! Signup creates the credential identity and the linked profile row in a
//! single transaction; session-state changes are published on the
//! in-process event stream for any registered observer.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use domain::models::official::OfficialPosition;
use domain::models::LeagueOfficial;
use persistence::repositories::{AuthSessionRepository, OfficialRepository};
use shared::crypto::sha256_hex;
use shared::jwt::{extract_subject_id, JwtConfig, JwtError, TokenRole};
use shared::password::{
    check_password_strength, hash_password, verify_password, PasswordError,
};

use crate::services::session_events::{SessionEvent, SessionEvents};

/// Errors that can occur during official authentication.
#[derive(Debug, Error)]
pub enum OfficialAuthError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Official profile not found")]
    ProfileNotFound,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token error: {0}")]
    TokenError(#[from] JwtError),

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Result of a successful official authentication.
#[derive(Debug, Clone)]
pub struct OfficialAuthResult {
    pub official: LeagueOfficial,
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_in: i64,
}

/// Result of a successful token refresh.
#[derive(Debug, Clone)]
pub struct OfficialRefreshResult {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// Authentication service for the league official portal.
#[derive(Clone)]
pub struct OfficialAuthService {
    officials: OfficialRepository,
    sessions: AuthSessionRepository,
    jwt: Arc<JwtConfig>,
    events: SessionEvents,
}

impl OfficialAuthService {
    /// Creates a new OfficialAuthService.
    pub fn new(pool: PgPool, jwt: Arc<JwtConfig>, events: SessionEvents) -> Self {
        Self {
            officials: OfficialRepository::new(pool.clone()),
            sessions: AuthSessionRepository::new(pool),
            jwt,
            events,
        }
    }

    /// Sign up a new official: credential identity plus profile row, then
    /// an authenticated session.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
        position: OfficialPosition,
        phone: Option<&str>,
    ) -> Result<OfficialAuthResult, OfficialAuthError> {
        check_password_strength(password)?;
        let password_hash = hash_password(password)?;
        let email = email.to_lowercase();

        if self.officials.find_account_by_email(&email).await?.is_some() {
            return Err(OfficialAuthError::EmailAlreadyExists);
        }

        let insert_result = self
            .officials
            .create_with_account(&email, &password_hash, name, position.into(), phone)
            .await;

        // Unique violation: concurrent signup with the same email.
        let profile = match insert_result {
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
                return Err(OfficialAuthError::EmailAlreadyExists);
            }
            other => other?,
        };

        let official: LeagueOfficial = profile.into();
        self.events.publish(SessionEvent::SignedUp {
            subject_id: official.id,
        });

        let (access_token, refresh_token) = self.issue_session(official.id).await?;
        self.events.publish(SessionEvent::SignedIn {
            subject_id: official.id,
            role: TokenRole::Official,
        });

        Ok(OfficialAuthResult {
            official,
            access_token,
            refresh_token,
            access_token_expires_in: self.jwt.access_token_expiry_secs,
        })
    }

    /// Login with email and password.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<OfficialAuthResult, OfficialAuthError> {
        let account = self
            .officials
            .find_account_by_email(email)
            .await?
            .ok_or(OfficialAuthError::InvalidCredentials)?;

        let is_valid = verify_password(password, &account.password_hash)?;
        if !is_valid {
            return Err(OfficialAuthError::InvalidCredentials);
        }

        let profile = self
            .officials
            .find_profile_by_id(account.id)
            .await?
            .ok_or(OfficialAuthError::ProfileNotFound)?;

        let official: LeagueOfficial = profile.into();
        let (access_token, refresh_token) = self.issue_session(official.id).await?;

        self.events.publish(SessionEvent::SignedIn {
            subject_id: official.id,
            role: TokenRole::Official,
        });

        Ok(OfficialAuthResult {
            official,
            access_token,
            refresh_token,
            access_token_expires_in: self.jwt.access_token_expiry_secs,
        })
    }

    /// Exchange a valid refresh token for a new token pair; single-use.
    pub async fn refresh(
        &self,
        refresh_token: &str,
    ) -> Result<OfficialRefreshResult, OfficialAuthError> {
        let claims = self
            .jwt
            .validate_refresh_token(refresh_token, TokenRole::Official)
            .map_err(|_| OfficialAuthError::InvalidRefreshToken)?;
        let official_id =
            extract_subject_id(&claims).map_err(|_| OfficialAuthError::InvalidRefreshToken)?;

        let token_hash = sha256_hex(refresh_token);
        let session = self
            .sessions
            .find_valid_by_token_hash(&token_hash)
            .await?
            .ok_or(OfficialAuthError::InvalidRefreshToken)?;

        if session.subject_id != official_id || session.role != TokenRole::Official.as_str() {
            return Err(OfficialAuthError::InvalidRefreshToken);
        }

        self.sessions.delete_by_token_hash(&token_hash).await?;

        let (access_token, refresh_token) = self.issue_session(official_id).await?;

        Ok(OfficialRefreshResult {
            access_token,
            refresh_token,
            expires_in: self.jwt.access_token_expiry_secs,
        })
    }

    /// Revoke the session behind a refresh token and notify observers.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), OfficialAuthError> {
        let token_hash = sha256_hex(refresh_token);
        let removed = self.sessions.delete_by_token_hash(&token_hash).await?;

        if removed {
            // Only a live session produces a sign-out notification.
            if let Ok(claims) = self
                .jwt
                .validate_refresh_token(refresh_token, TokenRole::Official)
            {
                if let Ok(official_id) = extract_subject_id(&claims) {
                    self.events.publish(SessionEvent::SignedOut {
                        subject_id: official_id,
                        role: TokenRole::Official,
                    });
                }
            }
        }

        Ok(())
    }

    /// Fetch the profile for a validated session (session restore).
    pub async fn profile(&self, official_id: Uuid) -> Result<LeagueOfficial, OfficialAuthError> {
        let profile = self
            .officials
            .find_profile_by_id(official_id)
            .await?
            .ok_or(OfficialAuthError::ProfileNotFound)?;
        Ok(profile.into())
    }

    async fn issue_session(&self, official_id: Uuid) -> Result<(String, String), OfficialAuthError> {
        let (access_token, _) = self
            .jwt
            .generate_access_token(official_id, TokenRole::Official)?;
        let (refresh_token, _) = self
            .jwt
            .generate_refresh_token(official_id, TokenRole::Official)?;

        let expires_at = Utc::now() + Duration::seconds(self.jwt.refresh_token_expiry_secs);
        self.sessions
            .create(
                official_id,
                TokenRole::Official.as_str(),
                &sha256_hex(&refresh_token),
                expires_at,
            )
            .await?;

        Ok((access_token, refresh_token))
    }
}
