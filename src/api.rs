use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{controllers, entities, errors, requests, responses, security};

/// Declares the `token` bearer scheme used by the admin endpoint
pub struct Authentication;

impl Modify for Authentication {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "token",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "User"),
        (name = "Welcome"),
        (name = "Debug"),
        (name = "Health"),
    ),
    modifiers(&Authentication),
    paths(
        controllers::v1::user::show,
        controllers::v1::user::delete,
        controllers::v1::welcome::welcome,
        controllers::v1::debug::debug,

        controllers::health::health,
        controllers::health::health_db,
    ),
    components(schemas(
        requests::v1::user::DeleteUserRequest,

        responses::v1::user::User,
        responses::v1::user::Deleted,
        responses::v1::welcome::Welcome,

        entities::v1::users::Role,
        errors::ErrorResponse,
        errors::ValidationErrorResponse,
        security::validation::Violation,
        security::validation::Location,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
