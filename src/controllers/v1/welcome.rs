use actix_web::get;
use actix_web::Responder;

use crate::errors::ValidationErrorResponse;
use crate::requests::v1::welcome::WelcomeQuery;
use crate::requests::Validated;
use crate::responses::v1::welcome::Welcome;
use crate::services;

/// Greet the caller
#[utoipa::path(
    tag = "Welcome",
    params(WelcomeQuery),
    responses(
        Welcome,
        (status = 400, description = "Invalid query", body = ValidationErrorResponse),
    ),
)]
#[get("/api/welcome")]
pub async fn welcome(Validated(request): Validated<WelcomeQuery>) -> impl Responder {
    services::v1::welcome::welcome(request)
}
