use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Value used for the admin shared secret when `ADMIN_TOKEN` is unset
pub const PLACEHOLDER_ADMIN_TOKEN: &str = "change-me-admin-token";

/// Authentication configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret accepted by the admin gate (`ADMIN_TOKEN`)
    #[serde(default = "default_admin_token")]
    pub admin_token: String,
    /// Argon2 configuration
    #[serde(default = "Argon2Config::default")]
    pub argon2: Argon2Config,
}

/// Argon2 password hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KB (64MB = 65536 KB)
    #[serde(default = "default_argon2_memory_cost")]
    pub memory_cost: u32,
    /// Time cost (iterations)
    #[serde(default = "default_argon2_time_cost")]
    pub time_cost: u32,
    /// Parallelism (number of threads)
    #[serde(default = "default_argon2_parallelism")]
    pub parallelism: u32,
    /// Hash length in bytes
    #[serde(default = "default_argon2_hash_length")]
    pub hash_length: u32,
}

fn default_admin_token() -> String {
    PLACEHOLDER_ADMIN_TOKEN.to_string()
}

fn default_argon2_memory_cost() -> u32 {
    65536 // 64 MB
}

fn default_argon2_time_cost() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

fn default_argon2_hash_length() -> u32 {
    32
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_token: default_admin_token(),
            argon2: Argon2Config::default(),
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: default_argon2_memory_cost(),
            time_cost: default_argon2_time_cost(),
            parallelism: default_argon2_parallelism(),
            hash_length: default_argon2_hash_length(),
        }
    }
}

impl AuthConfig {
    /// Whether the admin gate still accepts the built-in placeholder secret
    pub fn uses_placeholder_token(&self) -> bool {
        self.admin_token == PLACEHOLDER_ADMIN_TOKEN
    }
}

// Keeps the shared secret out of debug logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("admin_token", &"<redacted>")
            .field("argon2", &self.argon2)
            .finish()
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.admin_token.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "auth.admin_token cannot be empty".to_string(),
            ));
        }
        if self.admin_token.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(
                "auth.admin_token cannot contain whitespace".to_string(),
            ));
        }
        self.argon2.validate()
    }
}

impl Validate for Argon2Config {
    fn validate(&self) -> Result<(), ConfigError> {
        // Bounds enforced by argon2::Params::new
        if self.memory_cost < 8 * self.parallelism {
            return Err(ConfigError::ValidationError(
                "auth.argon2.memory_cost must be at least 8 * parallelism".to_string(),
            ));
        }
        if self.time_cost == 0 {
            return Err(ConfigError::ValidationError(
                "auth.argon2.time_cost must be > 0".to_string(),
            ));
        }
        if self.parallelism == 0 {
            return Err(ConfigError::ValidationError(
                "auth.argon2.parallelism must be > 0".to_string(),
            ));
        }
        if self.hash_length < 4 {
            return Err(ConfigError::ValidationError(
                "auth.argon2.hash_length must be >= 4".to_string(),
            ));
        }
        Ok(())
    }
}
