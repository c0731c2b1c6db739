//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write prompts and responses as JSONL
    pub interactions: bool,
    /// Directory for interaction logs; the data directory when unset
    pub interaction_dir: Option<String>,
    /// Also write diagnostics to this file (same as `--log-file`)
    pub file: Option<String>,
}
