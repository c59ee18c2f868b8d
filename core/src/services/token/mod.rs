//! Token service module for JWT management
//!
//! Issues signed access tokens for a subject and verifies them again.
//! Signing and verification are delegated to `jsonwebtoken`; this module
//! owns the expiry computation and the classification of failures.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
