use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::{TokenRequest, TokenResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/v1/token
///
/// Exchanges a username and password for a bearer access token.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "demo",
///     "password": "demo"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "token_type": "bearer",
///     "expires_in": 1800
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Invalid credentials
/// - 422 Unprocessable Entity: Body is not valid JSON or misses a field
pub async fn create_token(
    state: web::Data<AppState>,
    request: web::Json<TokenRequest>,
) -> HttpResponse {
    let TokenRequest { username, password } = request.into_inner();

    match state.auth_service.login(&username, &password) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse::from(token)),
        Err(error) => handle_domain_error(error),
    }
}
