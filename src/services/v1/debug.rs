use actix_web::HttpResponse;

use crate::config::ServerConfig;
use crate::errors::ApiError;

/// Always fails with an internal error whose detail names the listening
/// address. The detail is logged; the caller only sees the generic message.
pub fn fail(server: &ServerConfig) -> Result<HttpResponse, ApiError> {
    Err(ApiError::internal(format!(
        "Simulated internal error while contacting {}:{}",
        server.host, server.port
    )))
}
