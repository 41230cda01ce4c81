//! League official entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::official::OfficialPosition;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapping for the official_position PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "official_position")]
pub enum OfficialPositionDb {
    #[sqlx(rename = "League Secretary")]
    LeagueSecretary,
    #[sqlx(rename = "League Chairman")]
    LeagueChairman,
    #[sqlx(rename = "Technical Director")]
    TechnicalDirector,
    #[sqlx(rename = "Referee Coordinator")]
    RefereeCoordinator,
    #[sqlx(rename = "Youth Development Officer")]
    YouthDevelopmentOfficer,
    #[sqlx(rename = "Competition Manager")]
    CompetitionManager,
    #[sqlx(rename = "Media Officer")]
    MediaOfficer,
}

impl From<OfficialPositionDb> for OfficialPosition {
    fn from(db: OfficialPositionDb) -> Self {
        match db {
            OfficialPositionDb::LeagueSecretary => OfficialPosition::LeagueSecretary,
            OfficialPositionDb::LeagueChairman => OfficialPosition::LeagueChairman,
            OfficialPositionDb::TechnicalDirector => OfficialPosition::TechnicalDirector,
            OfficialPositionDb::RefereeCoordinator => OfficialPosition::RefereeCoordinator,
            OfficialPositionDb::YouthDevelopmentOfficer => OfficialPosition::YouthDevelopmentOfficer,
            OfficialPositionDb::CompetitionManager => OfficialPosition::CompetitionManager,
            OfficialPositionDb::MediaOfficer => OfficialPosition::MediaOfficer,
        }
    }
}

impl From<OfficialPosition> for OfficialPositionDb {
    fn from(position: OfficialPosition) -> Self {
        match position {
            OfficialPosition::LeagueSecretary => OfficialPositionDb::LeagueSecretary,
            OfficialPosition::LeagueChairman => OfficialPositionDb::LeagueChairman,
            OfficialPosition::TechnicalDirector => OfficialPositionDb::TechnicalDirector,
            OfficialPosition::RefereeCoordinator => OfficialPositionDb::RefereeCoordinator,
            OfficialPosition::YouthDevelopmentOfficer => OfficialPositionDb::YouthDevelopmentOfficer,
            OfficialPosition::CompetitionManager => OfficialPositionDb::CompetitionManager,
            OfficialPosition::MediaOfficer => OfficialPositionDb::MediaOfficer,
        }
    }
}

/// Database row mapping for the official_accounts table.
///
/// Holds the credential identity; the profile row in league_officials
/// shares its ID.
#[derive(Debug, Clone, FromRow)]
pub struct OfficialAccountEntity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Database row mapping for the league_officials table.
#[derive(Debug, Clone, FromRow)]
pub struct LeagueOfficialEntity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub position: OfficialPositionDb,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LeagueOfficialEntity> for domain::models::LeagueOfficial {
    fn from(entity: LeagueOfficialEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            position: entity.position.into(),
            phone: entity.phone,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_position_db_round_trip() {
        for position in OfficialPosition::all() {
            let db: OfficialPositionDb = (*position).into();
            let back: OfficialPosition = db.into();
            assert_eq!(back, *position);
        }
    }

    #[test]
    fn test_entity_to_domain_mapping() {
        let entity = LeagueOfficialEntity {
            id: Uuid::new_v4(),
            email: "secretary@aldaileague.org".to_string(),
            name: "John Kiptoo".to_string(),
            position: OfficialPositionDb::LeagueSecretary,
            phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let official: domain::models::LeagueOfficial = entity.clone().into();
        assert_eq!(official.id, entity.id);
        assert_eq!(official.position, OfficialPosition::LeagueSecretary);
    }
}
