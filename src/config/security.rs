use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Security configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// CORS configuration
    #[serde(default = "CorsConfig::default")]
    pub cors: CorsConfig,
    /// Security headers configuration
    #[serde(default = "SecurityHeadersConfig::default")]
    pub headers: SecurityHeadersConfig,
}

/// CORS (Cross-Origin Resource Sharing) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Enable CORS; when disabled every cross-origin request is refused
    #[serde(default = "default_cors_enabled")]
    pub enabled: bool,
    /// Allowed origins (e.g., ["https://example.com", "*"])
    #[serde(default = "default_cors_origins")]
    pub origins: Vec<String>,
    /// Allowed HTTP methods
    #[serde(default = "default_cors_methods")]
    pub methods: Vec<String>,
    /// Allowed HTTP headers
    #[serde(default = "default_cors_headers")]
    pub headers: Vec<String>,
    /// Max age in seconds for preflight requests
    #[serde(default = "default_cors_max_age")]
    pub max_age: usize,
}

/// Security headers configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityHeadersConfig {
    /// Enable security headers
    #[serde(default = "default_headers_enabled")]
    pub enabled: bool,
    /// Content Security Policy
    #[serde(default = "default_headers_csp")]
    pub csp: String,
    /// HSTS max age in seconds
    #[serde(default = "default_headers_hsts_max_age")]
    pub hsts_max_age: u64,
    /// X-Frame-Options
    #[serde(default = "default_headers_x_frame_options")]
    pub x_frame_options: String,
    /// X-Content-Type-Options
    #[serde(default = "default_headers_x_content_type_options")]
    pub x_content_type_options: String,
    /// Referrer-Policy
    #[serde(default = "default_headers_referrer_policy")]
    pub referrer_policy: String,
}

fn default_cors_enabled() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_methods() -> Vec<String> {
    vec!["GET".to_string(), "POST".to_string()]
}

fn default_cors_headers() -> Vec<String> {
    vec!["Authorization".to_string(), "Content-Type".to_string()]
}

fn default_cors_max_age() -> usize {
    3600 // 1 hour
}

fn default_headers_enabled() -> bool {
    true
}

fn default_headers_csp() -> String {
    "default-src 'none'; frame-ancestors 'none'".to_string()
}

fn default_headers_hsts_max_age() -> u64 {
    31536000 // 1 year
}

fn default_headers_x_frame_options() -> String {
    "DENY".to_string()
}

fn default_headers_x_content_type_options() -> String {
    "nosniff".to_string()
}

fn default_headers_referrer_policy() -> String {
    "no-referrer".to_string()
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_cors_enabled(),
            origins: default_cors_origins(),
            methods: default_cors_methods(),
            headers: default_cors_headers(),
            max_age: default_cors_max_age(),
        }
    }
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            enabled: default_headers_enabled(),
            csp: default_headers_csp(),
            hsts_max_age: default_headers_hsts_max_age(),
            x_frame_options: default_headers_x_frame_options(),
            x_content_type_options: default_headers_x_content_type_options(),
            referrer_policy: default_headers_referrer_policy(),
        }
    }
}

impl Validate for SecurityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.cors.validate()?;
        self.headers.validate()?;
        Ok(())
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.origins.is_empty() {
            return Err(ConfigError::ValidationError(
                "security.cors.origins cannot be empty when CORS is enabled".to_string(),
            ));
        }
        if self.enabled && self.methods.is_empty() {
            return Err(ConfigError::ValidationError(
                "security.cors.methods cannot be empty when CORS is enabled".to_string(),
            ));
        }
        if self.max_age == 0 {
            return Err(ConfigError::ValidationError(
                "security.cors.max_age must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for SecurityHeadersConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.csp.is_empty() {
            return Err(ConfigError::ValidationError(
                "security.headers.csp cannot be empty when security headers are enabled"
                    .to_string(),
            ));
        }
        if self.hsts_max_age == 0 {
            return Err(ConfigError::ValidationError(
                "security.headers.hsts_max_age must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
