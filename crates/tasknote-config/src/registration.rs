use std::env;

#[derive(Clone, Debug)]
pub struct RegistrationConfig {
    /// Maximum distance, in seconds, between a registration request's
    /// client timestamp and the server clock.
    pub replay_window: i64,
}

impl RegistrationConfig {
    pub fn from_env() -> Self {
        Self {
            replay_window: env::var("REGISTRATION_REPLAY_WINDOW")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(600), // 10 minutes
        }
    }

    /// Whether a request stamped at `timestamp` is still acceptable at `now`.
    pub fn is_fresh(&self, timestamp: i64, now: i64) -> bool {
        now.abs_diff(timestamp) <= self.replay_window.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fresh_window_is_symmetric() {
        let config = RegistrationConfig { replay_window: 600 };
        assert!(config.is_fresh(1_000, 1_600));
        assert!(config.is_fresh(1_600, 1_000));
        assert!(!config.is_fresh(1_000, 1_601));
        assert!(!config.is_fresh(1_601, 1_000));
    }

    #[test]
    fn test_extreme_timestamps_are_stale() {
        let config = RegistrationConfig { replay_window: 600 };
        assert!(!config.is_fresh(i64::MIN, 1_700_000_000));
        assert!(!config.is_fresh(i64::MAX, 1_700_000_000));
        assert!(!config.is_fresh(i64::MAX, i64::MIN));
        assert!(config.is_fresh(i64::MIN, i64::MIN + 600));
    }
}
