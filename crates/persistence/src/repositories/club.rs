//! Club repository for database operations.

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::entities::{ClubEntity, ClubWithPlayerCountEntity};
use crate::metrics::QueryTimer;

const CLUB_COLUMNS: &str = "id, name, location, founded_year, logo, created_at, updated_at";

/// Error type for club deletion.
#[derive(Debug, Error)]
pub enum ClubDeleteError {
    #[error("Cannot delete club with active players. Please transfer or remove all players first.")]
    HasPlayers { count: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository for club-related database operations.
#[derive(Clone)]
pub struct ClubRepository {
    pool: PgPool,
}

impl ClubRepository {
    /// Creates a new ClubRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All clubs ordered by name, each with its aggregate player count.
    ///
    /// One grouped query; the count is never fetched per club.
    pub async fn find_all_with_counts(
        &self,
    ) -> Result<Vec<ClubWithPlayerCountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_clubs");
        let result = sqlx::query_as::<_, ClubWithPlayerCountEntity>(
            r#"
            SELECT c.id, c.name, c.location, c.founded_year, c.logo, c.created_at, c.updated_at,
                   COUNT(p.id) AS player_count
            FROM clubs c
            LEFT JOIN players p ON p.club_id = c.id
            GROUP BY c.id
            ORDER BY c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a club by ID with its player count.
    pub async fn find_by_id_with_count(
        &self,
        id: Uuid,
    ) -> Result<Option<ClubWithPlayerCountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_club_by_id");
        let result = sqlx::query_as::<_, ClubWithPlayerCountEntity>(
            r#"
            SELECT c.id, c.name, c.location, c.founded_year, c.logo, c.created_at, c.updated_at,
                   COUNT(p.id) AS player_count
            FROM clubs c
            LEFT JOIN players p ON p.club_id = c.id
            WHERE c.id = $1
            GROUP BY c.id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a new club.
    pub async fn create(
        &self,
        name: &str,
        location: &str,
        founded_year: i32,
        logo: &str,
    ) -> Result<ClubEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_club");
        let result = sqlx::query_as::<_, ClubEntity>(&format!(
            r#"
            INSERT INTO clubs (name, location, founded_year, logo)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            CLUB_COLUMNS
        ))
        .bind(name)
        .bind(location)
        .bind(founded_year)
        .bind(logo)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a club.
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        location: &str,
        founded_year: i32,
        logo: &str,
    ) -> Result<Option<ClubEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_club");
        let result = sqlx::query_as::<_, ClubEntity>(&format!(
            r#"
            UPDATE clubs
            SET name = $2, location = $3, founded_year = $4, logo = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            CLUB_COLUMNS
        ))
        .bind(id)
        .bind(name)
        .bind(location)
        .bind(founded_year)
        .bind(logo)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Deletes a club, refusing while any player is registered to it.
    ///
    /// The count check and the delete run in one transaction, and the
    /// players.club_id foreign key is ON DELETE RESTRICT, so a player
    /// attached between check and delete still cannot orphan the club
    /// reference; the violation maps to the same domain error.
    pub async fn delete(&self, id: Uuid) -> Result<bool, ClubDeleteError> {
        let timer = QueryTimer::new("delete_club");

        let mut tx = self.pool.begin().await?;

        let player_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players WHERE club_id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        if player_count > 0 {
            return Err(ClubDeleteError::HasPlayers {
                count: player_count,
            });
        }

        let delete_result = sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await;

        let deleted = match delete_result {
            Ok(result) => result.rows_affected() > 0,
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23503") => {
                // Restrict violation: a player was attached concurrently.
                return Err(ClubDeleteError::HasPlayers { count: 1 });
            }
            Err(e) => return Err(e.into()),
        };

        tx.commit().await?;
        timer.record();
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_players_error_message_references_players() {
        let err = ClubDeleteError::HasPlayers { count: 3 };
        let message = err.to_string();
        assert!(message.contains("players"));
        assert!(message.contains("Cannot delete club"));
    }
}
