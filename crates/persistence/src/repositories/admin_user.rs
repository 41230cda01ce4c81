//! Admin user repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::AdminUserEntity;
use crate::metrics::QueryTimer;

const ADMIN_COLUMNS: &str = "id, username, password_hash, last_login_at, created_at, updated_at";

/// Repository for admin-console accounts.
#[derive(Clone)]
pub struct AdminUserRepository {
    pool: PgPool,
}

impl AdminUserRepository {
    /// Creates a new AdminUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an admin by username.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_admin_by_username");
        let result = sqlx::query_as::<_, AdminUserEntity>(&format!(
            "SELECT {} FROM admin_users WHERE username = $1",
            ADMIN_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// True if any admin account exists.
    pub async fn any_exists(&self) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("admin_exists");
        let result = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM admin_users)")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Create an admin account. Used by the startup bootstrap.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_admin");
        let result = sqlx::query_as::<_, AdminUserEntity>(&format!(
            r#"
            INSERT INTO admin_users (username, password_hash)
            VALUES ($1, $2)
            RETURNING {}
            "#,
            ADMIN_COLUMNS
        ))
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Stamp a successful login.
    pub async fn touch_last_login(&self, id: Uuid) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("touch_admin_last_login");
        let result = sqlx::query("UPDATE admin_users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|_| ())
    }
}
