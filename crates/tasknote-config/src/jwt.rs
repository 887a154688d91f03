use std::env;
use std::fmt;

/// Signing secret and token lifetime.
///
/// The secret is the single trust root for every outstanding token. Changing
/// it requires a restart and invalidates all tokens issued before.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Validity window of an access token, in seconds.
    pub access_token_expiry: i64,
    /// Clock skew tolerated when checking expiry, in seconds.
    pub leeway: i64,
}

impl JwtConfig {
    /// Loads the configuration from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or empty.
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .expect("JWT_SECRET must be set");

        Self {
            secret,
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(7200), // 2 hours
            leeway: env::var("JWT_LEEWAY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("leeway", &self.leeway)
            .finish()
    }
}
