//! Credential store connection and bootstrap
//!
//! The store is SQLite. With the default in-memory url it is volatile and
//! lives exactly as long as the pool's single connection.

pub mod seed;

use std::time::Duration;

use hardened_api_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use thiserror::Error;

use crate::config::{AppConfig, DatabaseConfig};
use crate::security::PasswordHasher;

/// An in-memory database disappears with its last connection, so that
/// connection must never be recycled by the pool.
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Connection, migration or query failure
    #[error("Database operation failed: {0}")]
    QueryFailed(#[from] DbErr),

    /// Seed password could not be hashed
    #[error("Failed to hash seed password: {0}")]
    Hash(String),
}

/// Open the connection pool described by `config`
#[::tracing::instrument(skip(config), fields(memory = config.is_memory()))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options.sqlx_logging(false);

    if config.is_memory() {
        options
            .max_connections(1)
            .min_connections(1)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(MEMORY_CONNECTION_LIFETIME);
    }

    Database::connect(options).await
}

/// Connect, apply migrations and seed the two fixed accounts
pub async fn bootstrap(config: &AppConfig) -> Result<DatabaseConnection, DatabaseError> {
    let db = connect(&config.database).await?;

    Migrator::up(&db, None).await?;
    ::tracing::info!("Migrations applied");

    let hasher = PasswordHasher::from_config(&config.auth.argon2)
        .map_err(|e| DatabaseError::Hash(e.to_string()))?;
    seed::run(&db, &hasher, &config.seed).await?;

    Ok(db)
}
