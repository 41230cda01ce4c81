//! League official repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{LeagueOfficialEntity, OfficialAccountEntity, OfficialPositionDb};
use crate::metrics::QueryTimer;

const OFFICIAL_COLUMNS: &str = "id, email, name, position, phone, created_at, updated_at";
const ACCOUNT_COLUMNS: &str = "id, email, password_hash, created_at";

/// Repository for league-official accounts and profiles.
#[derive(Clone)]
pub struct OfficialRepository {
    pool: PgPool,
}

impl OfficialRepository {
    /// Creates a new OfficialRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the credential identity and the linked profile row in one
    /// transaction. The profile shares the account's ID; one official per
    /// identity.
    pub async fn create_with_account(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        position: OfficialPositionDb,
        phone: Option<&str>,
    ) -> Result<LeagueOfficialEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_official");

        let id = Uuid::new_v4();
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO official_accounts (id, email, password_hash) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(email)
            .bind(password_hash)
            .execute(&mut *tx)
            .await?;

        let profile = sqlx::query_as::<_, LeagueOfficialEntity>(&format!(
            r#"
            INSERT INTO league_officials (id, email, name, position, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            OFFICIAL_COLUMNS
        ))
        .bind(id)
        .bind(email)
        .bind(name)
        .bind(position)
        .bind(phone)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(profile)
    }

    /// Find a credential account by email (lowercased before lookup).
    pub async fn find_account_by_email(
        &self,
        email: &str,
    ) -> Result<Option<OfficialAccountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_official_account_by_email");
        let result = sqlx::query_as::<_, OfficialAccountEntity>(&format!(
            "SELECT {} FROM official_accounts WHERE email = $1",
            ACCOUNT_COLUMNS
        ))
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an official's profile by identity ID.
    pub async fn find_profile_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<LeagueOfficialEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_official_profile");
        let result = sqlx::query_as::<_, LeagueOfficialEntity>(&format!(
            "SELECT {} FROM league_officials WHERE id = $1",
            OFFICIAL_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
