//! SQL injection tests
//!
//! Usernames and ids are bound as statement parameters. Every payload is
//! either matched literally (and so finds nothing) or rejected by
//! validation, and the table survives.

use actix_web::http::StatusCode;
use actix_web::test::{call_service, read_body_json, TestRequest};
use hardened_api::entities::v1::users::Model;
use hardened_api::testing::setup;
use serde_json::{json, Value};

use super::encode;

const USERNAME_PAYLOADS: [&str; 10] = [
    "admin' OR '1'='1",
    "admin'--",
    "admin' /*",
    "' OR 1=1 --",
    "'; DROP TABLE users; --",
    "admin\"; DROP TABLE users; --",
    "' UNION SELECT id, username, password_hash, role FROM users --",
    "%",
    "adm_n",
    "admin\\' OR \\'1\\'=\\'1",
];

#[actix_web::test]
async fn test_username_payloads_match_nothing() {
    let (service, db) = hardened_api::service!();

    for payload in USERNAME_PAYLOADS {
        let uri = format!("/api/user?username={}", encode(payload));
        let req = TestRequest::get().uri(&uri).to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{payload}");
        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Utilisateur introuvable" }), "{payload}");
    }

    assert_eq!(Model::count(&db).await.unwrap(), 2, "users table must survive");
}

#[actix_web::test]
async fn test_literal_username_still_matches() {
    let (service, _db) = hardened_api::service!();

    let uri = format!("/api/user?username={}", encode("admin"));
    let req = TestRequest::get().uri(&uri).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["id"], 1);
}

#[actix_web::test]
async fn test_id_payloads_are_rejected_by_validation() {
    let (service, db) = hardened_api::service!();

    for payload in ["1 OR 1=1", "1; DROP TABLE users", "2--", "0x02", "1e0"] {
        let req = TestRequest::post()
            .uri("/api/delete-user")
            .insert_header(("Authorization", format!("Bearer {}", setup::ADMIN_TOKEN)))
            .set_json(json!({ "id": payload }))
            .to_request();
        let resp = call_service(&service, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");
    }

    assert_eq!(Model::count(&db).await.unwrap(), 2);
}
