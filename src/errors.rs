//! HTTP error taxonomy
//!
//! Validation and not-found details are safe to show to the caller.
//! Internal details never leave the process: they are written to the log
//! when the response is rendered and the caller only sees
//! [`INTERNAL_ERROR_MESSAGE`].

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::security::validation::Violation;

/// Generic body returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Erreur interne";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        Self::Internal(detail.to_string())
    }
}

impl From<DbErr> for ApiError {
    fn from(error: DbErr) -> Self {
        Self::Internal(format!("database error: {error}"))
    }
}

/// `{ "error": "..." }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Utilisateur introuvable")]
    pub error: String,
}

/// `{ "errors": [...] }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<Violation>,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());

        match self {
            ApiError::Validation(violations) => {
                ::tracing::debug!(count = violations.len(), "Request rejected by validation");

                response.json(ValidationErrorResponse {
                    errors: violations.clone(),
                })
            }
            ApiError::Unauthenticated(message)
            | ApiError::Forbidden(message)
            | ApiError::NotFound(message) => response.json(ErrorResponse {
                error: message.clone(),
            }),
            ApiError::Internal(detail) => {
                ::tracing::error!(error = %detail, "Internal error");

                response.json(ErrorResponse {
                    error: INTERNAL_ERROR_MESSAGE.to_string(),
                })
            }
        }
    }
}
