use serde::{Deserialize, Serialize};

use super::{AuthConfig, ConfigError, SecurityConfig, Validate};

/// Top-level application configuration that aggregates all config modules
///
/// Built once in `main` and handed to the router, which shares it with
/// handlers as application data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub app: AppMetadata,
    /// Listening address and worker count
    #[serde(default)]
    pub server: ServerConfig,
    /// Credential store connection
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Admin shared secret and password hashing parameters
    #[serde(default)]
    pub auth: AuthConfig,
    /// Seed account passwords
    #[serde(default)]
    pub seed: SeedConfig,
    /// Security headers and CORS
    #[serde(default)]
    pub security: SecurityConfig,
    /// Logging
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// OpenAPI document
    #[serde(default)]
    pub api: ApiConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Application environment (development, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Overridden by the `PORT` environment variable
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Number of actix workers, each running its own event loop
    #[serde(default = "default_server_workers")]
    pub workers: usize,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection url; the in-memory default is volatile
    #[serde(default = "default_database_url")]
    pub url: String,
}

/// Passwords for the two seeded accounts
///
/// When unset, a random password is generated at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub admin_password: Option<String>,
    #[serde(default)]
    pub user_password: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Default filter directive, `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Colored output
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

/// API documentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Serve the OpenAPI document
    #[serde(default = "default_openapi_enabled")]
    pub openapi_enabled: bool,
    /// Path of the OpenAPI document
    #[serde(default = "default_openapi_path")]
    pub openapi_path: String,
}

fn default_app_name() -> String {
    "hardened-api".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn default_server_workers() -> usize {
    1
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ansi() -> bool {
    true
}

fn default_openapi_enabled() -> bool {
    true
}

fn default_openapi_path() -> String {
    "/api.json".to_string()
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            environment: default_environment(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            workers: default_server_workers(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            ansi: default_ansi(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            openapi_enabled: default_openapi_enabled(),
            openapi_path: default_openapi_path(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError("app.name cannot be empty".to_string()));
        }
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.environment cannot be empty".to_string(),
            ));
        }
        if self.shutdown_timeout == 0 {
            return Err(ConfigError::ValidationError(
                "app.shutdown_timeout must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::ValidationError("server.host cannot be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::ValidationError("server.port must be > 0".to_string()));
        }
        if self.workers == 0 {
            return Err(ConfigError::ValidationError("server.workers must be > 0".to_string()));
        }
        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.url.starts_with("sqlite:") {
            return Err(ConfigError::ValidationError(format!(
                "database.url must use the sqlite scheme, got {:?}",
                self.url
            )));
        }
        Ok(())
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let passwords = [
            ("seed.admin_password", &self.admin_password),
            ("seed.user_password", &self.user_password),
        ];
        for (name, password) in passwords {
            if password.as_deref().is_some_and(str::is_empty) {
                return Err(ConfigError::ValidationError(format!("{name} cannot be empty")));
            }
        }
        Ok(())
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if tracing_subscriber::EnvFilter::try_new(&self.log_level).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "observability.log_level is not a valid filter: {:?}",
                self.log_level
            )));
        }
        Ok(())
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.openapi_enabled && !self.openapi_path.starts_with('/') {
            return Err(ConfigError::ValidationError(
                "api.openapi_path must start with '/' when the document is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.seed.validate()?;
        self.security.validate()?;
        self.observability.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

/// Load configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. `ADMIN_TOKEN` and `PORT`
/// 2. Environment variables: HARDENED_API__SERVER__PORT=8080
/// 3. config/local.toml (git-ignored, developer overrides)
/// 4. config/{APP_ENV}.toml (development/staging/production)
/// 5. config/default.toml (base defaults)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};

    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let port = match std::env::var("PORT") {
        Ok(value) => Some(
            value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnv { name: "PORT", value })?,
        ),
        Err(_) => None,
    };
    let admin_token = std::env::var("ADMIN_TOKEN").ok();

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(
            Environment::with_prefix("HARDENED_API")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("server.port", port.map(i64::from))?
        .set_override_option("auth.admin_token", admin_token)?
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate()?;

    Ok(app_config)
}
