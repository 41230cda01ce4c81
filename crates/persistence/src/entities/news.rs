//! News article entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::news::NewsCategory;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapping for the news_category PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "news_category", rename_all = "lowercase")]
pub enum NewsCategoryDb {
    Matches,
    Transfers,
    Events,
    Youth,
    Announcements,
}

impl From<NewsCategoryDb> for NewsCategory {
    fn from(db: NewsCategoryDb) -> Self {
        match db {
            NewsCategoryDb::Matches => NewsCategory::Matches,
            NewsCategoryDb::Transfers => NewsCategory::Transfers,
            NewsCategoryDb::Events => NewsCategory::Events,
            NewsCategoryDb::Youth => NewsCategory::Youth,
            NewsCategoryDb::Announcements => NewsCategory::Announcements,
        }
    }
}

impl From<NewsCategory> for NewsCategoryDb {
    fn from(category: NewsCategory) -> Self {
        match category {
            NewsCategory::Matches => NewsCategoryDb::Matches,
            NewsCategory::Transfers => NewsCategoryDb::Transfers,
            NewsCategory::Events => NewsCategoryDb::Events,
            NewsCategory::Youth => NewsCategoryDb::Youth,
            NewsCategory::Announcements => NewsCategoryDb::Announcements,
        }
    }
}

/// Database row mapping for the news_articles table.
#[derive(Debug, Clone, FromRow)]
pub struct NewsArticleEntity {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: NewsCategoryDb,
    pub author: String,
    pub image_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NewsArticleEntity> for domain::models::NewsArticle {
    fn from(entity: NewsArticleEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            excerpt: entity.excerpt,
            content: entity.content,
            category: entity.category.into(),
            author: entity.author,
            image_url: entity.image_url,
            featured: entity.featured,
            published: entity.published,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_category_db_round_trip() {
        for category in [
            NewsCategory::Matches,
            NewsCategory::Transfers,
            NewsCategory::Events,
            NewsCategory::Youth,
            NewsCategory::Announcements,
        ] {
            let db: NewsCategoryDb = category.into();
            let back: NewsCategory = db.into();
            assert_eq!(back, category);
        }
    }
}
