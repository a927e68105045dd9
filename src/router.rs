use actix_web::web::{self, Data, ServiceConfig};
use actix_web::HttpResponse;
use sea_orm::DatabaseConnection;
use utoipa::OpenApi;

use crate::api::Definition;
use crate::config::AppConfig;
use crate::controllers;

/// Register shared state and every endpoint
///
/// The configuration is built once at startup and shared with handlers as
/// `Data<AppConfig>`; nothing reads process-wide state after this point.
pub fn route(app: &mut ServiceConfig, config: &AppConfig, db: &DatabaseConnection) {
    app.app_data(Data::new(db.clone()));
    app.app_data(Data::new(config.clone()));

    app.service(controllers::v1::user::show);
    app.service(controllers::v1::user::delete);
    app.service(controllers::v1::welcome::welcome);
    app.service(controllers::v1::debug::debug);

    app.service(controllers::health::health);
    app.service(controllers::health::health_db);

    if config.api.openapi_enabled {
        app.route(&config.api.openapi_path, web::get().to(openapi));
    }
}

async fn openapi() -> HttpResponse {
    HttpResponse::Ok().json(Definition::openapi())
}
