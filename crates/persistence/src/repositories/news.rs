//! News article repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{NewsArticleEntity, NewsCategoryDb};
use crate::metrics::QueryTimer;

const NEWS_COLUMNS: &str =
    "id, title, excerpt, content, category, author, image_url, featured, published, created_at, updated_at";

/// Repository for news-article database operations.
#[derive(Clone)]
pub struct NewsRepository {
    pool: PgPool,
}

impl NewsRepository {
    /// Creates a new NewsRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Articles newest first. The public surface passes
    /// `include_unpublished = false` and sees published articles only.
    pub async fn find_all(
        &self,
        include_unpublished: bool,
    ) -> Result<Vec<NewsArticleEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_news");

        let result = if include_unpublished {
            sqlx::query_as::<_, NewsArticleEntity>(&format!(
                "SELECT {} FROM news_articles ORDER BY created_at DESC",
                NEWS_COLUMNS
            ))
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, NewsArticleEntity>(&format!(
                "SELECT {} FROM news_articles WHERE published = true ORDER BY created_at DESC",
                NEWS_COLUMNS
            ))
            .fetch_all(&self.pool)
            .await
        };

        timer.record();
        result
    }

    /// Find an article by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<NewsArticleEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_news_by_id");
        let result = sqlx::query_as::<_, NewsArticleEntity>(&format!(
            "SELECT {} FROM news_articles WHERE id = $1",
            NEWS_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a news article.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        title: &str,
        excerpt: &str,
        content: &str,
        category: NewsCategoryDb,
        author: &str,
        image_url: Option<&str>,
        featured: bool,
        published: bool,
    ) -> Result<NewsArticleEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_news");
        let result = sqlx::query_as::<_, NewsArticleEntity>(&format!(
            r#"
            INSERT INTO news_articles (title, excerpt, content, category, author, image_url, featured, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            NEWS_COLUMNS
        ))
        .bind(title)
        .bind(excerpt)
        .bind(content)
        .bind(category)
        .bind(author)
        .bind(image_url)
        .bind(featured)
        .bind(published)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a news article.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        title: &str,
        excerpt: &str,
        content: &str,
        category: NewsCategoryDb,
        author: &str,
        image_url: Option<&str>,
        featured: bool,
        published: bool,
    ) -> Result<Option<NewsArticleEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_news");
        let result = sqlx::query_as::<_, NewsArticleEntity>(&format!(
            r#"
            UPDATE news_articles
            SET title = $2,
                excerpt = $3,
                content = $4,
                category = $5,
                author = $6,
                image_url = $7,
                featured = $8,
                published = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            NEWS_COLUMNS
        ))
        .bind(id)
        .bind(title)
        .bind(excerpt)
        .bind(content)
        .bind(category)
        .bind(author)
        .bind(image_url)
        .bind(featured)
        .bind(published)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a news article. Returns false when no row matched.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_news");
        let result = sqlx::query("DELETE FROM news_articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
