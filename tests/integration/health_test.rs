//! Integration tests for health check endpoints and the OpenAPI document

use actix_web::http::StatusCode;
use actix_web::test::{call_service, read_body_json, TestRequest};
use hardened_api::testing::setup;
use serde_json::Value;

#[actix_web::test]
async fn test_health_endpoint_returns_200_ok() {
    let (service, _db) = hardened_api::service!();

    let req = TestRequest::get().uri("/health").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "/health should always return 200 OK");
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_health_db_reports_connected() {
    let (service, _db) = hardened_api::service!();

    let req = TestRequest::get().uri("/health/db").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[actix_web::test]
async fn test_health_db_reports_closed_connection() {
    let (service, db) = hardened_api::service!();

    db.clone().close().await.unwrap();

    let req = TestRequest::get().uri("/health/db").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["database"], "disconnected");
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let (service, _db) = hardened_api::service!();

    let req = TestRequest::get().uri("/api.json").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert!(body["paths"]["/api/user"].is_object());
    assert!(body["paths"]["/api/delete-user"]["post"].is_object());
    assert!(body["components"]["securitySchemes"]["token"].is_object());
}

#[actix_web::test]
async fn test_openapi_document_can_be_disabled() {
    let mut config = setup::config();
    config.api.openapi_enabled = false;

    let (service, _db) = hardened_api::service!(config);

    let req = TestRequest::get().uri("/api.json").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
