//! About content entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::about::AboutSection;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapping for the about_section PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "about_section", rename_all = "lowercase")]
pub enum AboutSectionDb {
    Mission,
    Vision,
    History,
}

impl From<AboutSectionDb> for AboutSection {
    fn from(db: AboutSectionDb) -> Self {
        match db {
            AboutSectionDb::Mission => AboutSection::Mission,
            AboutSectionDb::Vision => AboutSection::Vision,
            AboutSectionDb::History => AboutSection::History,
        }
    }
}

impl From<AboutSection> for AboutSectionDb {
    fn from(section: AboutSection) -> Self {
        match section {
            AboutSection::Mission => AboutSectionDb::Mission,
            AboutSection::Vision => AboutSectionDb::Vision,
            AboutSection::History => AboutSectionDb::History,
        }
    }
}

/// Database row mapping for the about_content table.
#[derive(Debug, Clone, FromRow)]
pub struct AboutContentEntity {
    pub id: Uuid,
    pub section: AboutSectionDb,
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl From<AboutContentEntity> for domain::models::AboutContent {
    fn from(entity: AboutContentEntity) -> Self {
        Self {
            id: entity.id,
            section: entity.section.into(),
            title: entity.title,
            content: entity.content,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_section_db_round_trip() {
        for section in [
            AboutSection::Mission,
            AboutSection::Vision,
            AboutSection::History,
        ] {
            let db: AboutSectionDb = section.into();
            let back: AboutSection = db.into();
            assert_eq!(back, section);
        }
    }
}
