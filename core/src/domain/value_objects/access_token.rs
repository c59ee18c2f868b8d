//! Access token value object returned after a successful login.

use serde::{Deserialize, Serialize};

/// Token type advertised to clients
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// An issued access token together with its type and lifetime
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessToken {
    /// Encoded JWT
    pub access_token: String,

    /// Always "bearer"
    pub token_type: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl AccessToken {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        }
    }
}
