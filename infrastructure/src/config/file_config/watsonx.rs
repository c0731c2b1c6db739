//! watsonx.ai connection settings from TOML (`[watsonx]` section)

use edupulse_domain::ModelId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";
pub const DEFAULT_API_VERSION: &str = "2023-05-29";

/// Raw watsonx configuration from TOML
///
/// Credentials left unset here are read from `WATSONX_APIKEY`,
/// `WATSONX_PROJECT_ID` and `WATSONX_URL` when a session is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWatsonxConfig {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    /// Regional endpoint, e.g. `https://us-south.ml.cloud.ibm.com`
    pub url: Option<String>,
    /// Token exchange endpoint
    pub iam_url: String,
    /// `version` query parameter of the generation API
    pub api_version: String,
    pub model: ModelId,
}

impl Default for FileWatsonxConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            project_id: None,
            url: None,
            iam_url: DEFAULT_IAM_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model: ModelId::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileWatsonxConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model.as_str(), "ibm/granite-3-8b-instruct");
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_model_override() {
        let toml_str = r#"
[watsonx]
model = "ibm/granite-13b-chat-v2"
url = "https://eu-de.ml.cloud.ibm.com"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.watsonx.model.as_str(), "ibm/granite-13b-chat-v2");
        assert_eq!(
            config.watsonx.url.as_deref(),
            Some("https://eu-de.ml.cloud.ibm.com")
        );
    }
}
