//! Shared helpers for API integration tests

#![allow(dead_code)]

use actix_web::web;
use bd_api::AppState;
use bd_core::{TokenService, TokenServiceConfig};
use bd_shared::{AppConfig, Environment, JwtConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_config() -> AppConfig {
    AppConfig::new(Environment::Development, JwtConfig::new(TEST_SECRET))
}

pub fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::from_config(test_config()).expect("test state"))
}

/// A token service sharing the app's secret but with a custom lifetime
pub fn token_service_with_expiry(minutes: i64) -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        access_token_expiry_minutes: minutes,
        ..TokenServiceConfig::default()
    })
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
