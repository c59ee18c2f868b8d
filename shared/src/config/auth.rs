//! Token signing configuration

use serde::{Deserialize, Serialize};

use super::environment::Environment;
use super::ConfigError;

/// Algorithms usable with a shared secret
pub const SUPPORTED_ALGORITHMS: &[&str] = &["HS256", "HS384", "HS512"];

/// Shortest secret accepted in production, in bytes
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Longest accepted token lifetime (one year), in minutes
pub const MAX_EXPIRATION_MINUTES: i64 = 525_600;

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used to sign and verify tokens
    #[serde(default)]
    pub secret: String,

    /// Signing algorithm name (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token lifetime in minutes
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .field("algorithm", &self.algorithm)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl JwtConfig {
    /// Create a configuration with the given secret and default algorithm and expiry
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: default_algorithm(),
            expiration_minutes: default_expiration_minutes(),
        }
    }

    /// Set the signing algorithm
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Set the access token lifetime in minutes
    pub fn with_expiration_minutes(mut self, minutes: i64) -> Self {
        self.expiration_minutes = minutes;
        self
    }

    /// Check the settings against the environment they will run in
    pub fn validate(&self, environment: Environment) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        if !SUPPORTED_ALGORITHMS.contains(&self.algorithm.as_str()) {
            return Err(ConfigError::UnsupportedAlgorithm(self.algorithm.clone()));
        }

        if self.expiration_minutes <= 0 || self.expiration_minutes > MAX_EXPIRATION_MINUTES {
            return Err(ConfigError::Invalid {
                field: "jwt.expiration_minutes",
                reason: format!(
                    "must be between 1 and {}, got {}",
                    MAX_EXPIRATION_MINUTES, self.expiration_minutes
                ),
            });
        }

        if self.secret.len() < MIN_PRODUCTION_SECRET_LEN && environment.is_production() {
            return Err(ConfigError::WeakSecret {
                min_len: MIN_PRODUCTION_SECRET_LEN,
            });
        }

        Ok(())
    }

    /// Settings that load but should be reported once logging is up
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.secret.len() < MIN_PRODUCTION_SECRET_LEN {
            warnings.push(format!(
                "JWT secret is shorter than {} bytes; this is refused in production",
                MIN_PRODUCTION_SECRET_LEN
            ));
        }

        warnings
    }
}

pub(crate) fn default_algorithm() -> String {
    String::from("HS256")
}

pub(crate) fn default_expiration_minutes() -> i64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_defaults() {
        let config = JwtConfig::new("secret");
        assert_eq!(config.algorithm, "HS256");
        assert_eq!(config.expiration_minutes, 30);
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_algorithm("HS512")
            .with_expiration_minutes(5);
        assert_eq!(config.algorithm, "HS512");
        assert_eq!(config.expiration_minutes, 5);
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", JwtConfig::new("top-secret-value"));
        assert!(!rendered.contains("top-secret-value"));
        assert!(rendered.contains("[hidden]"));
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let env = Environment::Development;

        assert!(matches!(
            JwtConfig::new("  ").validate(env),
            Err(ConfigError::MissingSecret)
        ));
        assert!(matches!(
            JwtConfig::new("secret").with_algorithm("RS256").validate(env),
            Err(ConfigError::UnsupportedAlgorithm(alg)) if alg == "RS256"
        ));
        assert!(matches!(
            JwtConfig::new("secret").with_expiration_minutes(0).validate(env),
            Err(ConfigError::Invalid { field: "jwt.expiration_minutes", .. })
        ));
    }

    #[test]
    fn test_validate_bounds_expiration() {
        let secret = "a".repeat(44);

        for minutes in [MAX_EXPIRATION_MINUTES + 1, i64::MAX / 60, i64::MAX] {
            assert!(matches!(
                JwtConfig::new(secret.as_str())
                    .with_expiration_minutes(minutes)
                    .validate(Environment::Production),
                Err(ConfigError::Invalid { field: "jwt.expiration_minutes", .. })
            ));
        }

        assert!(JwtConfig::new(secret.as_str())
            .with_expiration_minutes(MAX_EXPIRATION_MINUTES)
            .validate(Environment::Production)
            .is_ok());
    }

    #[test]
    fn test_short_secret_only_refused_in_production() {
        let config = JwtConfig::new("short");
        assert!(config.validate(Environment::Development).is_ok());
        assert!(matches!(
            config.validate(Environment::Production),
            Err(ConfigError::WeakSecret { min_len: 32 })
        ));

        let strong = JwtConfig::new("a".repeat(MIN_PRODUCTION_SECRET_LEN));
        assert!(strong.validate(Environment::Production).is_ok());
    }

    #[test]
    fn test_short_secret_is_reported_as_warning() {
        let warnings = JwtConfig::new("short").warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("shorter than 32 bytes"));

        assert!(JwtConfig::new("a".repeat(MIN_PRODUCTION_SECRET_LEN)).warnings().is_empty());
    }
}
