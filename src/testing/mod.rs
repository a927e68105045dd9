//! Helpers shared by unit and integration tests

pub mod setup;

/// Build an initialized test service over a fresh seeded in-memory store
///
/// Returns `(service, db)`. The service is wired exactly like the server:
/// security headers outermost, then CORS, then the router.
///
/// ```no_run
/// # async fn example() {
/// let (service, db) = hardened_api::service!();
/// # }
/// ```
#[macro_export]
macro_rules! service {
    () => {
        $crate::service!($crate::testing::setup::config())
    };
    ($config:expr) => {{
        let config: $crate::config::AppConfig = $config;
        let db = $crate::testing::setup::database().await;
        let app = ::actix_web::App::new()
            .wrap($crate::security::cors::build(&config.security.cors))
            .wrap($crate::security::SecurityHeadersMiddleware::new(
                config.security.headers.clone(),
            ))
            .configure(|app| $crate::router::route(app, &config, &db));

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
