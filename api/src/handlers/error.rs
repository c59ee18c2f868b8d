//! Conversion of domain and request errors into HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use bd_core::{AuthError, DomainError, TokenError};
use bd_shared::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            tracing::debug!("Domain error: {}", error);
            ErrorResponse::new(error_codes::INVALID_CREDENTIALS, "Invalid credentials")
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Token(TokenError::InvalidSubject) => {
            tracing::debug!("Domain error: {}", error);
            ErrorResponse::new(error_codes::VALIDATION_ERROR, "Subject must be a non-empty string")
                .to_response(StatusCode::UNPROCESSABLE_ENTITY)
        }
        DomainError::Token(
            TokenError::Expired | TokenError::Malformed { .. } | TokenError::SignatureMismatch,
        ) => {
            tracing::debug!("Domain error: {}", error);
            ErrorResponse::new(error_codes::UNAUTHORIZED, "Invalid or expired token")
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Token(TokenError::Signing(_)) | DomainError::Internal { .. } => {
            tracing::error!("Domain error: {:?}", error);
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Turns JSON body extraction failures into 422 responses
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), "Rejected request body: {}", err);

    let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request body")
        .add_detail("reason", err.to_string())
        .to_response(StatusCode::UNPROCESSABLE_ENTITY);

    InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
