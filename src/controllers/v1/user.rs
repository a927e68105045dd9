use actix_web::{get, post};
use actix_web::web::Data;
use actix_web::Responder;
use sea_orm::DatabaseConnection;

use crate::errors::{ErrorResponse, ValidationErrorResponse};
use crate::middlewares::v1::auth::Admin;
use crate::requests::v1::user::{DeleteUserRequest, UserQuery};
use crate::requests::Validated;
use crate::responses::v1::user::{Deleted, User};
use crate::services;

/// Find user by username
///
/// The username is matched literally and case-sensitively.
#[utoipa::path(
    tag = "User",
    params(UserQuery),
    responses(
        User,
        (status = 400, description = "Invalid query", body = ValidationErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse),
    ),
)]
#[get("/api/user")]
pub async fn show(
    db: Data<DatabaseConnection>,
    Validated(request): Validated<UserQuery>,
) -> impl Responder {
    services::v1::user::show::show(&db, request).await
}

/// Delete user by id
///
/// Requires the admin token. Authorization is checked before the body is
/// read, so an unauthenticated request never reaches validation.
#[utoipa::path(
    tag = "User",
    security(("token" = [])),
    request_body = DeleteUserRequest,
    responses(
        Deleted,
        (status = 400, description = "Invalid body", body = ValidationErrorResponse),
        (status = 401, description = "Missing or malformed token", body = ErrorResponse),
        (status = 403, description = "Wrong token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse),
    ),
)]
#[post("/api/delete-user")]
pub async fn delete(
    _admin: Admin,
    db: Data<DatabaseConnection>,
    Validated(request): Validated<DeleteUserRequest>,
) -> impl Responder {
    services::v1::user::delete::delete(&db, request).await
}
