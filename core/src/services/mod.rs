//! Business services containing domain logic and use cases.

pub mod auth;
pub mod catalog;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, CredentialVerifier, DemoCredentials};
pub use catalog::CatalogService;
pub use token::{TokenService, TokenServiceConfig};
