//! Behavior configuration from TOML (`[behavior]` section)

use edupulse_application::BehaviorConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Upper bound on one inference call; `0` disables it.
    pub timeout_seconds: u64,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: BehaviorConfig::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FileBehaviorConfig {
    pub fn to_behavior(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(Some(self.timeout_seconds))
    }
}
