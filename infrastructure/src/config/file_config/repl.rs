//! Interactive session configuration from TOML (`[repl]` section)

use edupulse_domain::TaskKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Task selected when the session starts
    pub default_task: TaskKind,
    /// Path to the line-editor history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            default_task: TaskKind::LearningAssistant,
            history_file: None,
        }
    }
}
