//! Player entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::player::{PlayerStatus, Position};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapping for the player_position PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "player_position")]
pub enum PositionDb {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl From<PositionDb> for Position {
    fn from(db: PositionDb) -> Self {
        match db {
            PositionDb::Goalkeeper => Position::Goalkeeper,
            PositionDb::Defender => Position::Defender,
            PositionDb::Midfielder => Position::Midfielder,
            PositionDb::Forward => Position::Forward,
        }
    }
}

impl From<Position> for PositionDb {
    fn from(position: Position) -> Self {
        match position {
            Position::Goalkeeper => PositionDb::Goalkeeper,
            Position::Defender => PositionDb::Defender,
            Position::Midfielder => PositionDb::Midfielder,
            Position::Forward => PositionDb::Forward,
        }
    }
}

/// Database enum mapping for the player_status PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "player_status", rename_all = "lowercase")]
pub enum PlayerStatusDb {
    Active,
    Disabled,
}

impl From<PlayerStatusDb> for PlayerStatus {
    fn from(db: PlayerStatusDb) -> Self {
        match db {
            PlayerStatusDb::Active => PlayerStatus::Active,
            PlayerStatusDb::Disabled => PlayerStatus::Disabled,
        }
    }
}

impl From<PlayerStatus> for PlayerStatusDb {
    fn from(status: PlayerStatus) -> Self {
        match status {
            PlayerStatus::Active => PlayerStatusDb::Active,
            PlayerStatus::Disabled => PlayerStatusDb::Disabled,
        }
    }
}

/// Database row mapping for the players table.
#[derive(Debug, Clone, FromRow)]
pub struct PlayerEntity {
    pub id: Uuid,
    pub name: String,
    pub league_id: String,
    pub date_of_birth: NaiveDate,
    pub position: PositionDb,
    pub club_id: Option<Uuid>,
    pub verified: bool,
    pub photo_url: String,
    pub status: PlayerStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlayerEntity> for domain::models::Player {
    fn from(entity: PlayerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            league_id: entity.league_id,
            date_of_birth: entity.date_of_birth,
            position: entity.position.into(),
            club_id: entity.club_id,
            verified: entity.verified,
            photo_url: entity.photo_url,
            status: entity.status.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_db_round_trip() {
        for position in [
            Position::Goalkeeper,
            Position::Defender,
            Position::Midfielder,
            Position::Forward,
        ] {
            let db: PositionDb = position.into();
            let back: Position = db.into();
            assert_eq!(back, position);
        }
    }

    #[test]
    fn test_player_status_db_round_trip() {
        for status in [PlayerStatus::Active, PlayerStatus::Disabled] {
            let db: PlayerStatusDb = status.into();
            let back: PlayerStatus = db.into();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_entity_to_domain_mapping() {
        let entity = PlayerEntity {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            league_id: "ALD001".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            position: PositionDb::Midfielder,
            club_id: None,
            verified: false,
            photo_url: "https://example.com/p.jpg".to_string(),
            status: PlayerStatusDb::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let player: domain::models::Player = entity.clone().into();
        assert_eq!(player.id, entity.id);
        assert_eq!(player.league_id, "ALD001");
        assert_eq!(player.position, Position::Midfielder);
        assert_eq!(player.status, PlayerStatus::Active);
    }
}
