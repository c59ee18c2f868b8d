pub mod auth_dto;
pub mod error;
pub mod health_dto;

pub use auth_dto::{TokenRequest, TokenResponse};
pub use error::{ErrorResponse, ErrorResponseExt};
pub use health_dto::HealthResponse;
