//! Login: credential check followed by token issuance

use std::sync::Arc;

use crate::domain::value_objects::AccessToken;
use crate::errors::{AuthError, DomainError};
use crate::services::token::TokenService;

use super::credentials::CredentialVerifier;

/// Exchanges credentials for a bearer access token
pub struct AuthService {
    credentials: Box<dyn CredentialVerifier>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(credentials: Box<dyn CredentialVerifier>, token_service: Arc<TokenService>) -> Self {
        Self {
            credentials,
            token_service,
        }
    }

    /// Checks the credentials and issues a token whose subject is `username`
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - Credentials accepted
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Rejected
    /// * `Err(DomainError::Token(_))` - Token could not be signed
    pub fn login(&self, username: &str, password: &str) -> Result<AccessToken, DomainError> {
        if !self.credentials.verify(username, password) {
            tracing::info!(username = %username, "Login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(username)?;
        tracing::info!(username = %username, "Login succeeded");

        Ok(AccessToken::bearer(token, self.token_service.expires_in()))
    }
}
