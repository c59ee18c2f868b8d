//! Error types for authentication and token handling
//!
//! Every verification failure is represented by its own [`TokenError`]
//! variant. The HTTP layer decides how much of that distinction to expose.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token issuance and verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature checks out but the expiry is not in the future
    #[error("Token expired")]
    Expired,

    /// Not a decodable token: wrong segment count, bad base64 or JSON,
    /// missing required claims, or an empty subject
    #[error("Malformed token: {reason}")]
    Malformed { reason: String },

    /// Signature does not match the configured secret and algorithm
    #[error("Token signature mismatch")]
    SignatureMismatch,

    #[error("Subject must be a non-empty string")]
    InvalidSubject,

    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl TokenError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        TokenError::Malformed {
            reason: reason.into(),
        }
    }

    /// Short, stable name of the failure kind, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::Expired => "expired",
            TokenError::Malformed { .. } => "malformed",
            TokenError::SignatureMismatch => "signature_mismatch",
            TokenError::InvalidSubject => "invalid_subject",
            TokenError::Signing(_) => "signing",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                TokenError::SignatureMismatch
            }
            _ => TokenError::malformed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::{Error, ErrorKind};

    #[test]
    fn test_library_errors_are_classified() {
        assert_eq!(TokenError::from(Error::from(ErrorKind::ExpiredSignature)), TokenError::Expired);
        assert_eq!(
            TokenError::from(Error::from(ErrorKind::InvalidSignature)),
            TokenError::SignatureMismatch
        );
        assert_eq!(
            TokenError::from(Error::from(ErrorKind::InvalidAlgorithm)),
            TokenError::SignatureMismatch
        );
        assert!(matches!(
            TokenError::from(Error::from(ErrorKind::InvalidToken)),
            TokenError::Malformed { .. }
        ));
        assert!(matches!(
            TokenError::from(Error::from(ErrorKind::MissingRequiredClaim("exp".to_string()))),
            TokenError::Malformed { .. }
        ));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenError::Expired.kind(), "expired");
        assert_eq!(TokenError::malformed("x").kind(), "malformed");
        assert_eq!(TokenError::SignatureMismatch.kind(), "signature_mismatch");
    }
}
