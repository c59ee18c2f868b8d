//! Configuration for the token service

use std::str::FromStr;

use bd_shared::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("jwt_secret", &"[hidden]")
            .field("algorithm", &self.algorithm)
            .field("access_token_expiry_minutes", &self.access_token_expiry_minutes)
            .finish()
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: 30,
        }
    }
}

impl TryFrom<&JwtConfig> for TokenServiceConfig {
    type Error = DomainError;

    fn try_from(config: &JwtConfig) -> Result<Self, Self::Error> {
        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|e| DomainError::Internal {
            message: format!("invalid JWT algorithm '{}': {}", config.algorithm, e),
        })?;

        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(DomainError::Internal {
                message: format!("{:?} needs key material; only HMAC algorithms are supported", algorithm),
            });
        }

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            access_token_expiry_minutes: config.expiration_minutes,
        })
    }
}
