//! Player repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{PlayerEntity, PlayerStatusDb, PositionDb};
use crate::metrics::QueryTimer;
use chrono::NaiveDate;
use domain::models::player::format_league_id;

const PLAYER_COLUMNS: &str =
    "id, name, league_id, date_of_birth, position, club_id, verified, photo_url, status, created_at, updated_at";

/// Input for inserting a player row. The league ID is not part of this
/// struct; it is assigned inside the insert transaction.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub position: PositionDb,
    pub club_id: Option<Uuid>,
    pub verified: bool,
    pub photo_url: String,
}

/// Input for updating a player row. Neither the league ID nor the status
/// appears here: the league ID is immutable and the status has its own
/// single-field operation.
#[derive(Debug, Clone)]
pub struct PlayerUpdate {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub position: PositionDb,
    pub club_id: Option<Uuid>,
    pub verified: bool,
    pub photo_url: String,
}

/// Repository for player-related database operations.
#[derive(Clone)]
pub struct PlayerRepository {
    pool: PgPool,
}

impl PlayerRepository {
    /// Creates a new PlayerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All players, newest first. Admin surface: disabled players included.
    pub async fn find_all(&self) -> Result<Vec<PlayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_players");
        let result = sqlx::query_as::<_, PlayerEntity>(&format!(
            "SELECT {} FROM players ORDER BY created_at DESC",
            PLAYER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a player by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PlayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_player_by_id");
        let result = sqlx::query_as::<_, PlayerEntity>(&format!(
            "SELECT {} FROM players WHERE id = $1",
            PLAYER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All players registered to one club.
    pub async fn find_by_club(&self, club_id: Uuid) -> Result<Vec<PlayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_players_by_club");
        let result = sqlx::query_as::<_, PlayerEntity>(&format!(
            "SELECT {} FROM players WHERE club_id = $1 ORDER BY created_at DESC",
            PLAYER_COLUMNS
        ))
        .bind(club_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Public search: active players only, matched case-insensitively on
    /// name or league ID. An empty query returns every active player.
    pub async fn search_active(&self, query: &str) -> Result<Vec<PlayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_active_players");

        let result = if query.is_empty() {
            sqlx::query_as::<_, PlayerEntity>(&format!(
                "SELECT {} FROM players WHERE status = 'active' ORDER BY created_at DESC",
                PLAYER_COLUMNS
            ))
            .fetch_all(&self.pool)
            .await
        } else {
            let pattern = format!("%{}%", query);
            sqlx::query_as::<_, PlayerEntity>(&format!(
                r#"
                SELECT {}
                FROM players
                WHERE status = 'active'
                AND (name ILIKE $1 OR league_id ILIKE $1)
                ORDER BY created_at DESC
                "#,
                PLAYER_COLUMNS
            ))
            .bind(pattern)
            .fetch_all(&self.pool)
            .await
        };

        timer.record();
        result
    }

    /// Registers a player, assigning the next league ID atomically.
    ///
    /// The single-row counter is bumped and read inside the same
    /// transaction as the insert, so concurrent registrations cannot
    /// observe the same value. The UNIQUE constraint on league_id is the
    /// backstop.
    pub async fn create(&self, player: NewPlayer) -> Result<PlayerEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_player");

        let mut tx = self.pool.begin().await?;

        let counter: i64 = sqlx::query_scalar(
            "UPDATE league_id_counter SET last_value = last_value + 1 RETURNING last_value",
        )
        .fetch_one(&mut *tx)
        .await?;

        let league_id = format_league_id(counter);

        let entity = sqlx::query_as::<_, PlayerEntity>(&format!(
            r#"
            INSERT INTO players (name, league_id, date_of_birth, position, club_id, verified, photo_url, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'active')
            RETURNING {}
            "#,
            PLAYER_COLUMNS
        ))
        .bind(&player.name)
        .bind(&league_id)
        .bind(player.date_of_birth)
        .bind(player.position)
        .bind(player.club_id)
        .bind(player.verified)
        .bind(&player.photo_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(entity)
    }

    /// Updates the editable fields of a player. The league ID is absent
    /// from the statement so it can never be rewritten.
    pub async fn update(
        &self,
        id: Uuid,
        update: PlayerUpdate,
    ) -> Result<Option<PlayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_player");
        let result = sqlx::query_as::<_, PlayerEntity>(&format!(
            r#"
            UPDATE players
            SET name = $2,
                date_of_birth = $3,
                position = $4,
                club_id = $5,
                verified = $6,
                photo_url = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PLAYER_COLUMNS
        ))
        .bind(id)
        .bind(&update.name)
        .bind(update.date_of_birth)
        .bind(update.position)
        .bind(update.club_id)
        .bind(update.verified)
        .bind(&update.photo_url)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Single-field status update. No transition check: either status may
    /// be set from either status.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: PlayerStatusDb,
    ) -> Result<Option<PlayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("set_player_status");
        let result = sqlx::query_as::<_, PlayerEntity>(&format!(
            "UPDATE players SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            PLAYER_COLUMNS
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Unconditional delete. Returns false when no row matched.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_player");
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }

    /// Number of players registered to a club.
    pub async fn count_by_club(&self, club_id: Uuid) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_players_by_club");
        let result = sqlx::query_scalar("SELECT COUNT(*) FROM players WHERE club_id = $1")
            .bind(club_id)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }
}
