//! Admin gate on the delete endpoint
//!
//! No request without the exact admin token may modify the store, and the
//! gate answers before the body is validated.

use actix_web::http::StatusCode;
use actix_web::test::{call_service, read_body_json, TestRequest};
use hardened_api::entities::v1::users::Model;
use hardened_api::testing::setup;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_missing_or_malformed_header_is_401() {
    let (service, db) = hardened_api::service!();
    let token = setup::ADMIN_TOKEN;

    let headers = [
        None,
        Some(token.to_string()),
        Some(format!("Basic {token}")),
        Some(format!("bearer {token}")),
        Some("Bearer".to_string()),
        Some("Bearer ".to_string()),
    ];

    for header in headers {
        let mut req = TestRequest::post()
            .uri("/api/delete-user")
            .set_json(json!({ "id": 2 }));
        if let Some(value) = &header {
            req = req.insert_header(("Authorization", value.as_str()));
        }

        let resp = call_service(&service, req.to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{header:?}");
        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Non authentifié" }));
    }

    assert_eq!(Model::count(&db).await.unwrap(), 2);
}

#[actix_web::test]
async fn test_wrong_token_is_403() {
    let (service, db) = hardened_api::service!();

    for token in ["wrong", "change-me-admin-token", "test-admin-token ", "TEST-ADMIN-TOKEN"] {
        let req = TestRequest::post()
            .uri("/api/delete-user")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "id": 2 }))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{token:?}");
        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Accès refusé" }));
    }

    assert_eq!(Model::count(&db).await.unwrap(), 2);
}

#[actix_web::test]
async fn test_gate_runs_before_validation() {
    let (service, _db) = hardened_api::service!();

    let req = TestRequest::post()
        .uri("/api/delete-user")
        .set_json(json!({ "id": "not-a-number" }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = TestRequest::post()
        .uri("/api/delete-user")
        .insert_header(("Authorization", "Bearer wrong"))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_token_comes_from_config() {
    let mut config = setup::config();
    config.auth.admin_token = "rotated-secret".to_string();

    let (service, db) = hardened_api::service!(config);

    let req = TestRequest::post()
        .uri("/api/delete-user")
        .insert_header(("Authorization", format!("Bearer {}", setup::ADMIN_TOKEN)))
        .set_json(json!({ "id": 2 }))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::FORBIDDEN);

    let req = TestRequest::post()
        .uri("/api/delete-user")
        .insert_header(("Authorization", "Bearer rotated-secret"))
        .set_json(json!({ "id": 2 }))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    assert_eq!(Model::count(&db).await.unwrap(), 1);
}
