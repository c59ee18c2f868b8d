//! Shared configuration and common types for the bearer demo server
//!
//! This crate provides functionality used across the server crates:
//! - Layered settings loading and validation
//! - The JSON error body returned by every endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, CorsConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
