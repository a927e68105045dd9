use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use super::DatabaseError;
use crate::config::SeedConfig;
use crate::entities::v1::users::{ActiveModel, Model, Role};
use crate::security::PasswordHasher;

const GENERATED_PASSWORD_LENGTH: usize = 24;

/// Insert the admin (id 1) and user (id 2) accounts
///
/// Accounts whose username already exists are left untouched, so running
/// this against a persistent store is a no-op after the first start.
#[::tracing::instrument(skip_all)]
pub async fn run(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    config: &SeedConfig,
) -> Result<(), DatabaseError> {
    let accounts = [
        (1, "admin", Role::Admin, config.admin_password.as_deref()),
        (2, "user", Role::User, config.user_password.as_deref()),
    ];

    for (id, username, role, password) in accounts {
        if Model::find_by_username(db, username).await?.is_some() {
            ::tracing::debug!(username, "Seed account already present");
            continue;
        }

        let password = match password {
            Some(password) => password.to_string(),
            None => {
                ::tracing::info!(username, "No seed password configured, using a random one");
                generate_password()
            }
        };

        let password_hash = hasher
            .hash(&password)
            .map_err(|e| DatabaseError::Hash(e.to_string()))?;

        ActiveModel {
            id: Set(id),
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            role: Set(role),
        }
        .insert(db)
        .await?;

        ::tracing::info!(id, username, "Seed account created");
    }

    Ok(())
}

fn generate_password() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(GENERATED_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}
