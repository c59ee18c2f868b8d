//! Route handlers
//!
//! - `GET  /health` - liveness, no auth
//! - `POST /api/v1/token` - exchange credentials for a bearer token
//! - `GET  /api/v1/data` - protected data listing
//! - `GET  /api/v1/` - endpoint index

pub mod data;
pub mod docs;
pub mod health;
pub mod token;
