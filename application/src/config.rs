//! Application-level configuration.

use std::time::Duration;

/// Runtime behavior of the use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorConfig {
    /// Upper bound on a single inference call; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Timeout in seconds; `0` or `None` disables it.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }

    pub fn without_timeout() -> Self {
        Self { timeout: None }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self::from_timeout_seconds(Some(Self::DEFAULT_TIMEOUT_SECS))
    }
}
