//! Integration tests for the protected data endpoint

mod common;

use actix_web::{http::StatusCode, test};
use bd_api::create_app;
use bd_core::{TokenService, TokenServiceConfig};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_data_returns_200_with_token() {
    let state = common::test_state();
    let token = state.token_service.issue("demo").unwrap();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/data")
        .insert_header(common::bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_data_response_schema() {
    let state = common::test_state();
    let token = state.token_service.issue("demo").unwrap();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/data")
        .insert_header(common::bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 3);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["items"][0]["name"], "Widget A");
    assert_eq!(body["items"][0]["id"], 1);
    assert_eq!(body["items"][0]["category"], "widgets");
}

#[actix_web::test]
async fn test_data_returns_unauthorized_without_token() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::get().uri("/api/v1/data").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers().get("www-authenticate").unwrap(), "Bearer");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Not authenticated");
}

#[actix_web::test]
async fn test_data_rejects_invalid_token() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/data")
        .insert_header(common::bearer("invalid-token-value"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid or expired token");
}

#[actix_web::test]
async fn test_data_rejects_expired_token() {
    let expired = common::token_service_with_expiry(-5).issue("demo").unwrap();
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/data")
        .insert_header(common::bearer(&expired))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid or expired token");
}

#[actix_web::test]
async fn test_data_rejects_token_signed_with_other_secret() {
    let foreign = TokenService::new(TokenServiceConfig {
        jwt_secret: "some-other-secret".to_string(),
        ..TokenServiceConfig::default()
    });
    let token = foreign.issue("demo").unwrap();
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/data")
        .insert_header(common::bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_token_from_login_unlocks_data() {
    let app = test::init_service(create_app(common::test_state())).await;

    let login = test::TestRequest::post()
        .uri("/api/v1/token")
        .set_json(json!({"username": "demo", "password": "demo"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, login).await;
    let token = body["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/v1/data")
        .insert_header(common::bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
