//! Health check endpoints

use actix_web::web::{Data, Json};
use actix_web::{get, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LivenessResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Health response including the credential store
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    #[schema(example = "connected")]
    pub database: String,
}

/// Liveness check
///
/// Always 200 while the process serves requests; no dependency is checked.
#[utoipa::path(
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = LivenessResponse),
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    ::tracing::debug!("Liveness check: healthy");

    Json(LivenessResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check including database connectivity
#[utoipa::path(
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database unavailable", body = HealthResponse),
    )
)]
#[get("/health/db")]
pub async fn health_db(db: Data<DatabaseConnection>) -> impl Responder {
    let connected = match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            ::tracing::error!(error = %e, "Database ping failed");
            false
        }
    };

    let response = HealthResponse {
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
    };

    if connected {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
