//! Authentication service module
//!
//! Checks login credentials and exchanges them for an access token.

mod credentials;
mod service;


pub use credentials::{CredentialVerifier, DemoCredentials, DEMO_PASSWORD, DEMO_USERNAME};
pub use service::AuthService;
