//! # Bearer demo core
//!
//! Domain layer for the bearer-token demo API: token claims, the token
//! service that issues and verifies JWTs, the credential check, and the
//! static data catalog.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, DataItem};
pub use domain::value_objects::{AccessToken, DataPage};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use services::{AuthService, CatalogService, TokenService, TokenServiceConfig};
