//! Auth session entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the auth_sessions table.
///
/// One row per outstanding refresh token; `refresh_token_hash` is the
/// SHA-256 digest of the token, never the token itself.
#[derive(Debug, Clone, FromRow)]
pub struct AuthSessionEntity {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub role: String,
    pub refresh_token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AuthSessionEntity {
    /// Returns true if the session is past its expiry.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: DateTime<Utc>) -> AuthSessionEntity {
        AuthSessionEntity {
            id: Uuid::new_v4(),
            subject_id: Uuid::new_v4(),
            role: "admin".to_string(),
            refresh_token_hash: "deadbeef".to_string(),
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_expired() {
        assert!(session(Utc::now() - Duration::hours(1)).is_expired());
        assert!(!session(Utc::now() + Duration::hours(1)).is_expired());
    }
}
