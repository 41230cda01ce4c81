//! Gallery image repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{GalleryCategoryDb, GalleryImageEntity};
use crate::metrics::QueryTimer;

const GALLERY_COLUMNS: &str =
    "id, title, description, image_url, category, order_index, created_at, updated_at";

/// Repository for gallery-image database operations.
#[derive(Clone)]
pub struct GalleryRepository {
    pool: PgPool,
}

impl GalleryRepository {
    /// Creates a new GalleryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All images in display order. order_index is a manual sort key;
    /// ties fall back to creation time.
    pub async fn find_all(&self) -> Result<Vec<GalleryImageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_gallery");
        let result = sqlx::query_as::<_, GalleryImageEntity>(&format!(
            "SELECT {} FROM gallery_images ORDER BY order_index ASC, created_at ASC",
            GALLERY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an image by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<GalleryImageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_gallery_by_id");
        let result = sqlx::query_as::<_, GalleryImageEntity>(&format!(
            "SELECT {} FROM gallery_images WHERE id = $1",
            GALLERY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Add an image.
    pub async fn create(
        &self,
        title: &str,
        description: Option<&str>,
        image_url: &str,
        category: GalleryCategoryDb,
        order_index: i32,
    ) -> Result<GalleryImageEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_gallery_image");
        let result = sqlx::query_as::<_, GalleryImageEntity>(&format!(
            r#"
            INSERT INTO gallery_images (title, description, image_url, category, order_index)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            GALLERY_COLUMNS
        ))
        .bind(title)
        .bind(description)
        .bind(image_url)
        .bind(category)
        .bind(order_index)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update an image.
    pub async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
        image_url: &str,
        category: GalleryCategoryDb,
        order_index: i32,
    ) -> Result<Option<GalleryImageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_gallery_image");
        let result = sqlx::query_as::<_, GalleryImageEntity>(&format!(
            r#"
            UPDATE gallery_images
            SET title = $2,
                description = $3,
                image_url = $4,
                category = $5,
                order_index = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            GALLERY_COLUMNS
        ))
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(image_url)
        .bind(category)
        .bind(order_index)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an image. Returns false when no row matched.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_gallery_image");
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }
}
