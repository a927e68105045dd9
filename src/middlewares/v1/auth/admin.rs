use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use subtle::ConstantTimeEq;

use crate::config::AppConfig;
use crate::errors::ApiError;

pub const UNAUTHENTICATED_MESSAGE: &str = "Non authentifié";
pub const FORBIDDEN_MESSAGE: &str = "Accès refusé";

/// Proof that the request carried the admin shared secret
///
/// Expects `Authorization: Bearer <token>`. A missing or malformed header
/// is rejected with 401, a well-formed header with the wrong token with
/// 403. Put it first in a handler's arguments so it runs before any body
/// is read.
#[derive(Clone, Copy, Debug)]
pub struct Admin;

impl FromRequest for Admin {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authorize(req))
    }
}

fn authorize(req: &HttpRequest) -> Result<Admin, ApiError> {
    let config = req
        .app_data::<Data<AppConfig>>()
        .ok_or_else(|| ApiError::internal("application config is not registered"))?;

    let token = bearer_token(req).ok_or_else(|| {
        ::tracing::warn!(path = %req.path(), "Missing or malformed authorization header");

        ApiError::Unauthenticated(UNAUTHENTICATED_MESSAGE.to_string())
    })?;

    let expected = config.auth.admin_token.as_bytes();
    if bool::from(token.as_bytes().ct_eq(expected)) {
        Ok(Admin)
    } else {
        ::tracing::warn!(path = %req.path(), "Rejected admin token");

        Err(ApiError::Forbidden(FORBIDDEN_MESSAGE.to_string()))
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    (!token.is_empty()).then_some(token)
}
