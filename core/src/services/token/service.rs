//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT access tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// Keys are derived from the shared secret once, here. The validation
    /// accepts only the configured algorithm, requires `sub` and `exp`, and
    /// applies no clock leeway.
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Access token lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        self.config.access_token_expiry_minutes.saturating_mul(60)
    }

    /// Issues a signed access token for `subject`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(TokenError::InvalidSubject)` - The subject is empty
    /// * `Err(TokenError::Signing)` - The lifetime overflows a timestamp or the
    ///   signing library rejected the key
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::InvalidSubject);
        }

        let minutes = self.config.access_token_expiry_minutes;
        let claims = Claims::try_new(subject, minutes).ok_or_else(|| {
            TokenError::Signing(format!("token lifetime of {} minutes is out of range", minutes))
        })?;
        let token = self.encode_claims(&claims)?;

        tracing::debug!(subject = %subject, exp = claims.exp, "Issued access token");
        Ok(token)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verifies a token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature matches and expiry is in the future
    /// * `Err(TokenError::Expired)` - Signature matches but the token expired
    /// * `Err(TokenError::SignatureMismatch)` - Wrong secret or algorithm
    /// * `Err(TokenError::Malformed)` - Anything that does not decode
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::malformed("empty token"));
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::from)?
            .claims;

        // The library accepts `exp == now`; an expiry must be strictly in the future.
        if claims.is_expired() {
            return Err(TokenError::Expired);
        }

        if claims.sub.is_empty() {
            return Err(TokenError::malformed("empty subject"));
        }

        Ok(claims)
    }

    /// Verifies a token, collapsing every failure into `None`
    ///
    /// For callers that only distinguish valid from invalid tokens.
    pub fn claims_or_empty(&self, token: &str) -> Option<Claims> {
        match self.verify(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!(kind = e.kind(), error = %e, "Token rejected");
                None
            }
        }
    }
}
