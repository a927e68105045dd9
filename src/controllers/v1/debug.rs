use actix_web::get;
use actix_web::web::Data;
use actix_web::Responder;

use crate::config::AppConfig;
use crate::errors::ErrorResponse;
use crate::services;

/// Always fails
///
/// Demonstrates that internal details stay in the server log.
#[utoipa::path(
    tag = "Debug",
    responses(
        (status = 500, description = "Generic internal error", body = ErrorResponse),
    ),
)]
#[get("/api/debug")]
pub async fn debug(config: Data<AppConfig>) -> impl Responder {
    services::v1::debug::fail(&config.server)
}
