//! Auth session repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::AuthSessionEntity;
use crate::metrics::QueryTimer;

const SESSION_COLUMNS: &str = "id, subject_id, role, refresh_token_hash, expires_at, created_at";

/// Repository for refresh-token sessions, shared by both authentication
/// providers. The role column keeps the two tiers apart.
#[derive(Clone)]
pub struct AuthSessionRepository {
    pool: PgPool,
}

impl AuthSessionRepository {
    /// Creates a new AuthSessionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a new session for an issued refresh token.
    pub async fn create(
        &self,
        subject_id: Uuid,
        role: &str,
        refresh_token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<AuthSessionEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_auth_session");
        let result = sqlx::query_as::<_, AuthSessionEntity>(&format!(
            r#"
            INSERT INTO auth_sessions (subject_id, role, refresh_token_hash, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            SESSION_COLUMNS
        ))
        .bind(subject_id)
        .bind(role)
        .bind(refresh_token_hash)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a live session by the hash of its refresh token.
    pub async fn find_valid_by_token_hash(
        &self,
        refresh_token_hash: &str,
    ) -> Result<Option<AuthSessionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_auth_session");
        let result = sqlx::query_as::<_, AuthSessionEntity>(&format!(
            "SELECT {} FROM auth_sessions WHERE refresh_token_hash = $1 AND expires_at > NOW()",
            SESSION_COLUMNS
        ))
        .bind(refresh_token_hash)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Revoke one session. Returns false when no row matched.
    pub async fn delete_by_token_hash(
        &self,
        refresh_token_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_auth_session");
        let result = sqlx::query("DELETE FROM auth_sessions WHERE refresh_token_hash = $1")
            .bind(refresh_token_hash)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }

    /// Revoke every session of a subject (logout everywhere).
    pub async fn delete_all_for_subject(&self, subject_id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_subject_sessions");
        let result = sqlx::query("DELETE FROM auth_sessions WHERE subject_id = $1")
            .bind(subject_id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
