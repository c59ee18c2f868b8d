//! Application settings
//!
//! Settings are layered, lowest precedence first:
//! - built-in defaults
//! - `config/default.toml`, then `config/<environment>.toml` (both optional)
//! - process environment variables (a `.env` file is loaded into the
//!   environment first by [`AppConfig::from_env`])
//!
//! The result is validated once and then treated as immutable for the
//! lifetime of the process.

pub mod auth;
pub mod environment;
pub mod server;

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{JwtConfig, SUPPORTED_ALGORITHMS};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Directory searched for optional settings files
pub const CONFIG_DIR: &str = "config";

/// Environment variables and the settings keys they override
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("JWT_SECRET", "jwt.secret"),
    ("JWT_ALGORITHM", "jwt.algorithm"),
    ("JWT_EXPIRATION_MINUTES", "jwt.expiration_minutes"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("SERVER_WORKERS", "server.workers"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
    ("ALLOWED_ORIGINS", "cors.allowed_origins"),
    ("CORS_MAX_AGE", "cors.max_age"),
];

/// Errors raised while loading or validating settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingSecret,

    #[error("JWT secret must be at least {min_len} bytes in production")]
    WeakSecret { min_len: usize },

    #[error("Unsupported JWT algorithm '{0}' (expected one of HS256, HS384, HS512)")]
    UnsupportedAlgorithm(String),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Complete application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment tag
    pub environment: Environment,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// `.env` file that was loaded, if any
    #[serde(skip)]
    pub env_file: Option<PathBuf>,
}

impl AppConfig {
    /// Build a configuration in code, with defaults for everything but the secret
    pub fn new(environment: Environment, jwt: JwtConfig) -> Self {
        Self {
            environment,
            jwt,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(environment),
            env_file: None,
        }
    }

    /// Load settings from `.env`, the settings files and the process environment
    ///
    /// Nothing is logged here since the subscriber is configured from the
    /// result; report [`AppConfig::warnings`] once it is installed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_file = dotenvy::dotenv().ok();

        let mut config = Self::load_from(|key| std::env::var(key).ok(), Path::new(CONFIG_DIR))?;
        config.env_file = env_file;
        Ok(config)
    }

    /// Load settings using `lookup` for environment variables and `config_dir`
    /// for settings files
    pub fn load_from<F>(lookup: F, config_dir: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ENVIRONMENT") {
            Some(value) => value.parse::<Environment>().map_err(|reason| ConfigError::Invalid {
                field: "environment",
                reason,
            })?,
            None => Environment::default(),
        };
        let logging = LoggingConfig::for_environment(environment);

        let default_file = config_dir.join("default");
        let environment_file = config_dir.join(environment.to_string());

        let mut builder = Config::builder()
            .set_default("jwt.algorithm", auth::default_algorithm())?
            .set_default("jwt.expiration_minutes", auth::default_expiration_minutes())?
            .set_default("server.host", server::default_host())?
            .set_default("server.port", i64::from(server::default_port()))?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format.as_str())?
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&environment_file.to_string_lossy()).required(false))
            .set_override("environment", environment.to_string())?;

        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, lookup(var))?;
        }

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate cross-field invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate(self.environment)?;

        if self.server.workers == Some(0) {
            return Err(ConfigError::Invalid {
                field: "server.workers",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Non-fatal problems with otherwise valid settings
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = self.jwt.warnings();

        if self.environment.is_production() && self.cors.origins().is_empty() {
            warnings.push(
                "ALLOWED_ORIGINS is empty; cross-origin requests will be refused".to_string(),
            );
        }

        warnings
    }
}
