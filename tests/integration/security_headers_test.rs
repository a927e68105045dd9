//! Security headers on the real endpoints
//!
//! Headers must be present on every status the API produces, including
//! responses built by extractors that reject the request.

use actix_web::http::{header, Method, StatusCode};
use actix_web::test::{call_service, TestRequest};
use hardened_api::config::SecurityHeadersConfig;
use hardened_api::testing::setup;
use serde_json::json;

const REQUIRED_HEADERS: [&str; 8] = [
    "content-security-policy",
    "strict-transport-security",
    "x-frame-options",
    "x-content-type-options",
    "referrer-policy",
    "x-xss-protection",
    "x-permitted-cross-domain-policies",
    "cache-control",
];

#[actix_web::test]
async fn test_headers_on_every_status() {
    let (service, _db) = hardened_api::service!();

    let requests = [
        (TestRequest::get().uri("/api/user?username=admin").to_request(), StatusCode::OK),
        (TestRequest::get().uri("/api/user?username=ghost").to_request(), StatusCode::NOT_FOUND),
        (TestRequest::get().uri("/api/user").to_request(), StatusCode::BAD_REQUEST),
        (
            TestRequest::post()
                .uri("/api/delete-user")
                .set_json(json!({ "id": 2 }))
                .to_request(),
            StatusCode::UNAUTHORIZED,
        ),
        (
            TestRequest::post()
                .uri("/api/delete-user")
                .insert_header(("Authorization", "Bearer nope"))
                .set_json(json!({ "id": 2 }))
                .to_request(),
            StatusCode::FORBIDDEN,
        ),
        (TestRequest::get().uri("/api/debug").to_request(), StatusCode::INTERNAL_SERVER_ERROR),
        (TestRequest::get().uri("/api/welcome").to_request(), StatusCode::OK),
    ];

    for (req, expected) in requests {
        let path = req.path().to_string();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), expected, "{path}");
        for header in REQUIRED_HEADERS {
            assert!(resp.headers().contains_key(header), "{header} missing on {path}");
        }
    }
}

#[actix_web::test]
async fn test_header_values_match_config() {
    let config = SecurityHeadersConfig::default();
    let (service, _db) = hardened_api::service!();

    let req = TestRequest::get().uri("/api/welcome").to_request();
    let resp = call_service(&service, req).await;
    let header = |name: &str| resp.headers().get(name).unwrap().to_str().unwrap().to_string();

    assert_eq!(header("content-security-policy"), config.csp);
    assert_eq!(
        header("strict-transport-security"),
        format!("max-age={}; includeSubDomains", config.hsts_max_age)
    );
    assert_eq!(header("x-frame-options"), config.x_frame_options);
    assert_eq!(header("x-content-type-options"), config.x_content_type_options);
    assert_eq!(header("referrer-policy"), config.referrer_policy);
    assert_eq!(header("x-xss-protection"), "0");
    assert_eq!(header("cache-control"), "no-store");
}

#[actix_web::test]
async fn test_json_content_type_preserved() {
    let (service, _db) = hardened_api::service!();

    let req = TestRequest::get().uri("/api/user?username=admin").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "application/json"
    );
}

#[actix_web::test]
async fn test_headers_can_be_disabled() {
    let mut config = setup::config();
    config.security.headers.enabled = false;

    let (service, _db) = hardened_api::service!(config);

    let req = TestRequest::get().uri("/api/welcome").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    for header in REQUIRED_HEADERS {
        assert!(!resp.headers().contains_key(header), "{header} should be absent");
    }
}

fn preflight(origin: &str, method: &str) -> actix_web::test::TestRequest {
    TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/delete-user")
        .insert_header((header::ORIGIN, origin))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, method))
}

#[actix_web::test]
async fn test_headers_on_cors_preflight() {
    let (service, _db) = hardened_api::service!();

    let req = preflight("https://app.example.com", "POST").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    for name in REQUIRED_HEADERS {
        assert!(resp.headers().contains_key(name), "{name} missing on preflight");
    }
}

#[actix_web::test]
async fn test_headers_on_rejected_preflight() {
    let mut config = setup::config();
    config.security.cors.origins = vec!["https://app.example.com".to_string()];

    let (service, _db) = hardened_api::service!(config);

    let requests = [
        preflight("https://app.example.com", "DELETE").to_request(),
        preflight("https://evil.example.com", "POST").to_request(),
    ];

    for req in requests {
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(!resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        for name in REQUIRED_HEADERS {
            assert!(resp.headers().contains_key(name), "{name} missing on rejected preflight");
        }
    }
}
