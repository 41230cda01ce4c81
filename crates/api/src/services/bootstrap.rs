//! Admin bootstrap service for initial setup.
//!
//! Creates the first admin account on startup if configured. Idempotent:
//! once any admin exists, startup does nothing.

use sqlx::PgPool;
use tracing::{info, warn};

use persistence::repositories::AdminUserRepository;
use shared::password::{hash_password, PasswordError};

use crate::config::AdminBootstrapConfig;

/// Error types for admin bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),
}

/// Bootstrap the admin account if configured and not already done.
///
/// Called after migrations on startup.
pub async fn bootstrap_admin(
    pool: &PgPool,
    config: &AdminBootstrapConfig,
) -> Result<(), BootstrapError> {
    if config.bootstrap_username.is_empty() {
        return Ok(());
    }

    if config.bootstrap_password.is_empty() {
        warn!(
            "LM__ADMIN__BOOTSTRAP_USERNAME is set but LM__ADMIN__BOOTSTRAP_PASSWORD is empty - skipping bootstrap"
        );
        return Ok(());
    }

    let admins = AdminUserRepository::new(pool.clone());

    if admins.any_exists().await? {
        info!("Admin account already exists - skipping bootstrap");
        return Ok(());
    }

    let password_hash = hash_password(&config.bootstrap_password)?;
    let admin = admins
        .create(&config.bootstrap_username, &password_hash)
        .await?;

    info!(admin_id = %admin.id, username = %admin.username, "Bootstrap admin account created");
    Ok(())
}
