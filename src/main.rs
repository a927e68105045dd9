use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use anyhow::Context;

use hardened_api::security::{cors, SecurityHeadersMiddleware};
use hardened_api::{config, database, observability, router};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load().context("Failed to load configuration")?;

    observability::init(&config.observability).context("Failed to initialize logging")?;

    ::tracing::info!(
        name = %config.app.name,
        environment = %config.app.environment,
        "Starting service"
    );

    if config.auth.uses_placeholder_token() {
        ::tracing::warn!("ADMIN_TOKEN is not set, the placeholder admin token is in use");
    }

    let db = database::bootstrap(&config)
        .await
        .context("Failed to bootstrap database")?;

    let address = (config.server.host.clone(), config.server.port);
    let workers = config.server.workers;
    let shutdown_timeout = config.app.shutdown_timeout;

    ::tracing::info!(host = %address.0, port = address.1, workers, "Listening");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors::build(&config.security.cors))
            .wrap(SecurityHeadersMiddleware::new(config.security.headers.clone()))
            .wrap(Logger::default())
            .configure(|app| router::route(app, &config, &db))
    })
    .workers(workers)
    .shutdown_timeout(shutdown_timeout)
    .bind(address)
    .context("Failed to bind server address")?;

    server.run().await?;

    ::tracing::info!("Server stopped");

    Ok(())
}
