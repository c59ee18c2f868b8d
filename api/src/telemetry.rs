//! Tracing subscriber setup

use bd_shared::{AppConfig, LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber; `RUST_LOG` overrides the configured level
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty().with_target(true)).init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
    }

    tracing::info!(
        level = %config.level,
        format = config.format.as_str(),
        "Logging initialized"
    );
}

/// Logs how settings were loaded, including any non-fatal warnings
///
/// Called after [`init_tracing`], since loading happens before a subscriber exists.
pub fn report_settings(config: &AppConfig) {
    if let Some(path) = &config.env_file {
        tracing::debug!("Loaded environment file {}", path.display());
    }

    tracing::debug!(
        environment = %config.environment,
        algorithm = %config.jwt.algorithm,
        expiration_minutes = config.jwt.expiration_minutes,
        "Settings loaded"
    );

    for warning in config.warnings() {
        tracing::warn!("{}", warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bd_shared::{Environment, JwtConfig};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(config: &AppConfig) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || report_settings(config));
        logs.contents()
    }

    #[test]
    fn test_short_secret_is_logged_as_warning() {
        let config = AppConfig::new(Environment::Development, JwtConfig::new("short"));

        let output = capture(&config);
        assert!(output.contains("WARN"));
        assert!(output.contains("JWT secret is shorter than 32 bytes"));
        assert!(output.contains("Settings loaded"));
    }

    #[test]
    fn test_strong_secret_logs_no_warning() {
        let config = AppConfig::new(
            Environment::Development,
            JwtConfig::new("a-development-secret-of-sufficient-length"),
        );

        let output = capture(&config);
        assert!(!output.contains("WARN"));
        assert!(output.contains("Settings loaded"));
    }
}
