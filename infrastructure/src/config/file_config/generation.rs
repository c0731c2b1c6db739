//! Decoding settings from TOML (`[generation]` section)

use edupulse_domain::{ConfigIssue, ConfigIssueCode, DecodingMethod, DecodingParams};
use serde::{Deserialize, Serialize};

/// Raw generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// "greedy" or "sample"
    pub decoding_method: String,
    pub temperature: f32,
    pub min_new_tokens: u32,
    pub max_new_tokens: u32,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = DecodingParams::default();
        Self {
            decoding_method: params.decoding_method.to_string(),
            temperature: params.temperature,
            min_new_tokens: params.min_new_tokens,
            max_new_tokens: params.max_new_tokens,
        }
    }
}

impl FileGenerationConfig {
    /// Convert to domain params, with any issues found.
    ///
    /// An unknown decoding method falls back to greedy with a warning; range
    /// problems are errors.
    pub fn to_decoding_params(&self) -> (DecodingParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let decoding_method = match self.decoding_method.parse::<DecodingMethod>() {
            Ok(method) => method,
            Err(e) => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "generation.decoding_method".to_string(),
                        value: self.decoding_method.clone(),
                        valid_values: vec!["greedy".to_string(), "sample".to_string()],
                    },
                    format!("generation.decoding_method: {}, falling back to greedy", e),
                ));
                DecodingMethod::Greedy
            }
        };

        let params = DecodingParams {
            decoding_method,
            temperature: self.temperature,
            min_new_tokens: self.min_new_tokens,
            max_new_tokens: self.max_new_tokens,
        };

        issues.extend(params.problems().into_iter().map(|problem| {
            ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "generation".to_string(),
                },
                format!("generation: {}", problem),
            )
        }));

        (params, issues)
    }
}
