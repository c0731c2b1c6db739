//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod behavior;
mod generation;
mod logging;
mod output;
mod repl;
mod transcripts;
mod watsonx;

pub use behavior::FileBehaviorConfig;
pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use transcripts::FileTranscriptsConfig;
pub use watsonx::{DEFAULT_API_VERSION, DEFAULT_IAM_URL, FileWatsonxConfig};

use edupulse_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Endpoint, credentials and model
    pub watsonx: FileWatsonxConfig,
    /// Decoding policy
    pub generation: FileGenerationConfig,
    /// Call timeout
    pub behavior: FileBehaviorConfig,
    /// Diagnostics and interaction logs
    pub logging: FileLoggingConfig,
    /// Transcript store location
    pub transcripts: FileTranscriptsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive session settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Decoding method and generation ranges
    /// 2. Blank model id
    /// 3. Credentials set to an empty string (unset is fine, the
    ///    environment is consulted later)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Generation parameters
        issues.extend(self.generation.to_decoding_params().1);

        // 2. Model
        if self.watsonx.model.as_str().trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "watsonx.model".to_string(),
                },
                "watsonx.model: model id cannot be empty",
            ));
        }

        // 3. Blank credentials
        for (field, value) in [
            ("watsonx.api_key", &self.watsonx.api_key),
            ("watsonx.project_id", &self.watsonx.project_id),
            ("watsonx.url", &self.watsonx.url),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{}: empty value, the environment will be used instead", field),
                ));
            }
        }

        issues
    }
}
