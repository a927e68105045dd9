
pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod observability;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod services;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use errors::ApiError;
pub use middlewares::v1::auth::Admin;
pub use security::SecurityHeadersMiddleware;
