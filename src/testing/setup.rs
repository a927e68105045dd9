use sea_orm::DatabaseConnection;

use crate::config::{AppConfig, Argon2Config, SeedConfig};
use crate::security::PasswordHasher;

/// Admin token accepted by [`config`]
pub const ADMIN_TOKEN: &str = "test-admin-token";

pub const ADMIN_PASSWORD: &str = "admin-test-password";

pub const USER_PASSWORD: &str = "user-test-password";

/// Argon2 parameters cheap enough to hash on every test
///
/// - memory_cost: 19456 KB instead of 64 MB
/// - time_cost: 1 iteration instead of 3
/// - parallelism: 1 lane instead of 4
pub fn argon2() -> Argon2Config {
    Argon2Config {
        memory_cost: 19456,
        time_cost: 1,
        parallelism: 1,
        hash_length: 32,
    }
}

/// Default configuration with a known admin token and seed passwords
pub fn config() -> AppConfig {
    let mut config = AppConfig::default();

    config.auth.admin_token = ADMIN_TOKEN.to_string();
    config.auth.argon2 = argon2();
    config.seed = SeedConfig {
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        user_password: Some(USER_PASSWORD.to_string()),
    };

    config
}

pub fn password_hasher() -> PasswordHasher {
    PasswordHasher::from_config(&argon2()).expect("Test Argon2 parameters should be valid")
}

/// Fresh in-memory store with migrations applied and both accounts seeded
///
/// Every call returns an isolated database.
///
/// # Panics
/// Panics if the connection, migrations or seeding fail; tests should fail
/// fast when setup is broken.
pub async fn database() -> DatabaseConnection {
    crate::database::bootstrap(&config())
        .await
        .expect("Failed to bootstrap in-memory database")
}
