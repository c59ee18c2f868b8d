//! Integration tests for token issuance

mod common;

use actix_web::{http::StatusCode, test};
use bd_api::create_app;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_token_endpoint_returns_jwt() {
    let state = common::test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/token")
        .set_json(json!({"username": "demo", "password": "demo"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["expires_in"], 1800);

    let token = body["access_token"].as_str().expect("access_token");
    let claims = state.token_service.verify(token).expect("issued token verifies");
    assert_eq!(claims.sub, "demo");
}

#[actix_web::test]
async fn test_token_endpoint_rejects_wrong_password() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/token")
        .set_json(json!({"username": "demo", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
    assert_eq!(body["message"], "Invalid credentials");
}

#[actix_web::test]
async fn test_token_endpoint_rejects_unknown_user() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/token")
        .set_json(json!({"username": "admin", "password": "demo"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_token_endpoint_rejects_invalid_body() {
    let app = test::init_service(create_app(common::test_state())).await;

    let missing_field = test::TestRequest::post()
        .uri("/api/v1/token")
        .set_json(json!({"username": "demo"}))
        .to_request();
    let resp = test::call_service(&app, missing_field).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let not_json = test::TestRequest::post()
        .uri("/api/v1/token")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("username=demo&password=demo")
        .to_request();
    let resp = test::call_service(&app, not_json).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_token_endpoint_is_not_cached() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/token")
        .set_json(json!({"username": "demo", "password": "demo"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get("cache-control").unwrap(), "no-store");
}
