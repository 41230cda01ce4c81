//! About content repository for database operations.

use sqlx::PgPool;

use crate::entities::{AboutContentEntity, AboutSectionDb};
use crate::metrics::QueryTimer;

const ABOUT_COLUMNS: &str = "id, section, title, content, updated_at";

/// Repository for about-page content. A fixed-key document store: one row
/// per section, written with upsert semantics.
#[derive(Clone)]
pub struct AboutContentRepository {
    pool: PgPool,
}

impl AboutContentRepository {
    /// Creates a new AboutContentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All sections ordered by section key.
    pub async fn find_all(&self) -> Result<Vec<AboutContentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_about");
        let result = sqlx::query_as::<_, AboutContentEntity>(&format!(
            "SELECT {} FROM about_content ORDER BY section",
            ABOUT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find one section.
    pub async fn find_by_section(
        &self,
        section: AboutSectionDb,
    ) -> Result<Option<AboutContentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_about_section");
        let result = sqlx::query_as::<_, AboutContentEntity>(&format!(
            "SELECT {} FROM about_content WHERE section = $1",
            ABOUT_COLUMNS
        ))
        .bind(section)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert or replace a section's content.
    pub async fn upsert(
        &self,
        section: AboutSectionDb,
        title: &str,
        content: &str,
    ) -> Result<AboutContentEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_about_section");
        let result = sqlx::query_as::<_, AboutContentEntity>(&format!(
            r#"
            INSERT INTO about_content (section, title, content)
            VALUES ($1, $2, $3)
            ON CONFLICT (section)
            DO UPDATE SET title = EXCLUDED.title, content = EXCLUDED.content, updated_at = NOW()
            RETURNING {}
            "#,
            ABOUT_COLUMNS
        ))
        .bind(section)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
