//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the identity the token asserts)
    pub sub: String,

    /// Issued at timestamp
    #[serde(default)]
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `subject` that expire `expiry_minutes` from now
    ///
    /// Returns `None` when the expiry does not fit in a timestamp.
    pub fn try_new(subject: impl Into<String>, expiry_minutes: i64) -> Option<Self> {
        let now = Utc::now();
        let expiry = now.checked_add_signed(Duration::try_minutes(expiry_minutes)?)?;

        Some(Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        })
    }

    /// Checks if the claims have expired
    ///
    /// A token whose expiry equals the current second is already expired.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }
}
