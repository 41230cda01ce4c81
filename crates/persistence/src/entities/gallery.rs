//! Gallery image entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::gallery::GalleryCategory;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapping for the gallery_category PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "gallery_category", rename_all = "lowercase")]
pub enum GalleryCategoryDb {
    Matches,
    Training,
    Events,
    Awards,
    Youth,
}

impl From<GalleryCategoryDb> for GalleryCategory {
    fn from(db: GalleryCategoryDb) -> Self {
        match db {
            GalleryCategoryDb::Matches => GalleryCategory::Matches,
            GalleryCategoryDb::Training => GalleryCategory::Training,
            GalleryCategoryDb::Events => GalleryCategory::Events,
            GalleryCategoryDb::Awards => GalleryCategory::Awards,
            GalleryCategoryDb::Youth => GalleryCategory::Youth,
        }
    }
}

impl From<GalleryCategory> for GalleryCategoryDb {
    fn from(category: GalleryCategory) -> Self {
        match category {
            GalleryCategory::Matches => GalleryCategoryDb::Matches,
            GalleryCategory::Training => GalleryCategoryDb::Training,
            GalleryCategory::Events => GalleryCategoryDb::Events,
            GalleryCategory::Awards => GalleryCategoryDb::Awards,
            GalleryCategory::Youth => GalleryCategoryDb::Youth,
        }
    }
}

/// Database row mapping for the gallery_images table.
#[derive(Debug, Clone, FromRow)]
pub struct GalleryImageEntity {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: GalleryCategoryDb,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GalleryImageEntity> for domain::models::GalleryImage {
    fn from(entity: GalleryImageEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            image_url: entity.image_url,
            category: entity.category.into(),
            order_index: entity.order_index,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_category_db_round_trip() {
        for category in [
            GalleryCategory::Matches,
            GalleryCategory::Training,
            GalleryCategory::Events,
            GalleryCategory::Awards,
            GalleryCategory::Youth,
        ] {
            let db: GalleryCategoryDb = category.into();
            let back: GalleryCategory = db.into();
            assert_eq!(back, category);
        }
    }
}
