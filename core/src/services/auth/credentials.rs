//! Credential verification

use constant_time_eq::constant_time_eq;

/// Username accepted by [`DemoCredentials`]
pub const DEMO_USERNAME: &str = "demo";

/// Password accepted by [`DemoCredentials`]
pub const DEMO_PASSWORD: &str = "demo";

/// Decides whether a username/password pair may log in
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single fixed username/password pair
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    username: String,
    password: String,
}

impl DemoCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self::new(DEMO_USERNAME, DEMO_PASSWORD)
    }
}

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        // Evaluate both comparisons so timing does not reveal which one failed.
        let username_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());
        let password_ok = constant_time_eq(password.as_bytes(), self.password.as_bytes());
        username_ok & password_ok
    }
}
