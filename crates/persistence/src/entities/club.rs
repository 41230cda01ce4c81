//! Club entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the clubs table.
#[derive(Debug, Clone, FromRow)]
pub struct ClubEntity {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub founded_year: i32,
    pub logo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClubEntity {
    /// Converts into the domain model with a known player count.
    ///
    /// The count is derived, not stored; freshly created clubs pass 0.
    pub fn into_club(self, player_count: i64) -> domain::models::Club {
        domain::models::Club {
            id: self.id,
            name: self.name,
            location: self.location,
            founded_year: self.founded_year,
            logo: self.logo,
            player_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Club row joined with its aggregate player count.
#[derive(Debug, Clone, FromRow)]
pub struct ClubWithPlayerCountEntity {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub founded_year: i32,
    pub logo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub player_count: i64,
}

impl From<ClubWithPlayerCountEntity> for domain::models::Club {
    fn from(entity: ClubWithPlayerCountEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            founded_year: entity.founded_year,
            logo: entity.logo,
            player_count: entity.player_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_club_carries_count() {
        let entity = ClubEntity {
            id: Uuid::new_v4(),
            name: "Aldai United".to_string(),
            location: "Kaptumo".to_string(),
            founded_year: 1995,
            logo: "https://example.com/crest.png".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let club = entity.into_club(7);
        assert_eq!(club.player_count, 7);
        assert_eq!(club.founded_year, 1995);
    }

    #[test]
    fn test_with_count_entity_to_domain() {
        let entity = ClubWithPlayerCountEntity {
            id: Uuid::new_v4(),
            name: "Aldai United".to_string(),
            location: "Kaptumo".to_string(),
            founded_year: 1995,
            logo: "https://example.com/crest.png".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            player_count: 2,
        };

        let club: domain::models::Club = entity.into();
        assert_eq!(club.player_count, 2);
    }
}
