use actix_cors::Cors;

use crate::config::CorsConfig;

/// Build the CORS middleware from configuration
///
/// A disabled configuration yields actix-cors' default, which refuses every
/// cross-origin request.
pub fn build(config: &CorsConfig) -> Cors {
    if !config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default()
        .allowed_methods(config.methods.iter().map(String::as_str))
        .allowed_headers(config.headers.iter().map(String::as_str))
        .max_age(config.max_age);

    if config.origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
