pub mod app;
pub mod auth;
pub mod security;

use thiserror::Error;

pub use app::{
    ApiConfig, AppConfig, AppMetadata, DatabaseConfig, ObservabilityConfig, SeedConfig,
    ServerConfig,
};
pub use auth::{Argon2Config, AuthConfig, PLACEHOLDER_ADMIN_TOKEN};
pub use security::{CorsConfig, SecurityConfig, SecurityHeadersConfig};

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Configuration sections check their own invariants after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
