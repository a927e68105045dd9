//! # Security Headers Middleware
//!
//! Adds the standard set of HTTP security headers to every response,
//! including error responses produced by extractors and handlers.
//!
//! - **Content-Security-Policy**: the API serves JSON only, so nothing is allowed
//! - **Strict-Transport-Security**: forces HTTPS on compliant clients
//! - **X-Frame-Options**: refuses framing
//! - **X-Content-Type-Options**: disables MIME sniffing
//! - **Referrer-Policy**: controls referrer leakage
//! - **X-XSS-Protection**: set to `0`, the legacy auditor is itself exploitable
//! - **X-Permitted-Cross-Domain-Policies**: `none`
//! - **Cache-Control**: `no-store`, responses may carry user records
//!
//! ## Example
//!
//! ```rust,no_run
//! use hardened_api::config::SecurityHeadersConfig;
//! use hardened_api::security::SecurityHeadersMiddleware;
//! use actix_web::{App, HttpServer};
//!
//! #[actix_web::main]
//! async fn main() {
//!     let config = SecurityHeadersConfig::default();
//!
//!     HttpServer::new(move || {
//!         App::new()
//!             .wrap(SecurityHeadersMiddleware::new(config.clone()))
//!             // ... your routes
//!     })
//!     .bind("0.0.0.0:3000")
//!     .unwrap()
//!     .run()
//!     .await
//!     .unwrap()
//! }
//! ```

use std::future::{ready, Ready};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, HeaderName, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;

use crate::config::SecurityHeadersConfig;

/// Security headers middleware for actix-web
///
/// Values come from [`SecurityHeadersConfig`]; an empty configured value
/// skips that header, and `enabled = false` skips them all.
pub struct SecurityHeadersMiddleware {
    config: SecurityHeadersConfig,
}

impl SecurityHeadersMiddleware {
    pub fn new(config: SecurityHeadersConfig) -> Self {
        Self { config }
    }

    /// Create middleware with default configuration
    pub fn default_config() -> Self {
        Self::new(SecurityHeadersConfig::default())
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeadersMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersMiddlewareService {
            service,
            config: self.config.clone(),
        }))
    }
}

/// Security headers middleware service
pub struct SecurityHeadersMiddlewareService<S> {
    service: S,
    config: SecurityHeadersConfig,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let config = self.config.clone();

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            if config.enabled {
                apply(res.headers_mut(), &config);
            }

            Ok(res)
        })
    }
}

fn apply(headers: &mut HeaderMap, config: &SecurityHeadersConfig) {
    insert_configured(
        headers,
        "content-security-policy",
        &config.csp,
        "default-src 'none'",
    );

    let hsts = format!("max-age={}; includeSubDomains", config.hsts_max_age);
    insert_configured(
        headers,
        "strict-transport-security",
        &hsts,
        "max-age=31536000; includeSubDomains",
    );

    insert_configured(headers, "x-frame-options", &config.x_frame_options, "DENY");
    insert_configured(
        headers,
        "x-content-type-options",
        &config.x_content_type_options,
        "nosniff",
    );
    insert_configured(
        headers,
        "referrer-policy",
        &config.referrer_policy,
        "no-referrer",
    );

    headers.insert(
        HeaderName::from_static("x-xss-protection"),
        HeaderValue::from_static("0"),
    );
    headers.insert(
        HeaderName::from_static("x-permitted-cross-domain-policies"),
        HeaderValue::from_static("none"),
    );
    headers.insert(
        HeaderName::from_static("cache-control"),
        HeaderValue::from_static("no-store"),
    );
}

/// Insert a configured value, falling back to `fallback` when the value is
/// not a valid header. Empty values are skipped.
fn insert_configured(
    headers: &mut HeaderMap,
    name: &'static str,
    value: &str,
    fallback: &'static str,
) {
    if value.is_empty() {
        return;
    }

    let value = HeaderValue::from_str(value).unwrap_or_else(|_| {
        ::tracing::warn!(header = name, "Invalid configured header value, using fallback");
        HeaderValue::from_static(fallback)
    });

    headers.insert(HeaderName::from_static(name), value);
}
