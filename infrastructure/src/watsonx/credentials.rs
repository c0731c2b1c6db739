//! Credential resolution
//!
//! Config values win over the environment. Nothing is cached: every session
//! open resolves again, so fixing a missing variable takes effect on the
//! next call.

use super::error::{Result, WatsonxError};
use crate::config::FileWatsonxConfig;

pub const ENV_API_KEY: &str = "WATSONX_APIKEY";
pub const ENV_PROJECT_ID: &str = "WATSONX_PROJECT_ID";
pub const ENV_URL: &str = "WATSONX_URL";

/// Environment lookup; swappable in tests.
pub type EnvLookup = fn(&str) -> Option<String>;

pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[derive(Clone, PartialEq, Eq)]
pub struct WatsonxCredentials {
    pub api_key: String,
    pub project_id: String,
    pub url: String,
}

impl std::fmt::Debug for WatsonxCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatsonxCredentials")
            .field("api_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("url", &self.url)
            .finish()
    }
}

impl WatsonxCredentials {
    /// Resolve all three values, reporting every missing one at once.
    pub fn resolve(config: &FileWatsonxConfig, env: EnvLookup) -> Result<Self> {
        let pick = |configured: &Option<String>, key: &str| {
            configured
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .or_else(|| env(key).filter(|v| !v.trim().is_empty()))
        };

        let api_key = pick(&config.api_key, ENV_API_KEY);
        let project_id = pick(&config.project_id, ENV_PROJECT_ID);
        let url = pick(&config.url, ENV_URL);

        match (api_key, project_id, url) {
            (Some(api_key), Some(project_id), Some(url)) => Ok(Self {
                api_key,
                project_id,
                url: url.trim_end_matches('/').to_string(),
            }),
            (api_key, project_id, url) => {
                let missing = [
                    (api_key.is_none(), ENV_API_KEY),
                    (project_id.is_none(), ENV_PROJECT_ID),
                    (url.is_none(), ENV_URL),
                ]
                .into_iter()
                .filter_map(|(missing, key)| missing.then_some(key))
                .collect();
                Err(WatsonxError::MissingCredentials(missing))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn full_env(key: &str) -> Option<String> {
        match key {
            ENV_API_KEY => Some("env-key".to_string()),
            ENV_PROJECT_ID => Some("env-project".to_string()),
            ENV_URL => Some("https://env.example.com/".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_reads_environment() {
        let creds = WatsonxCredentials::resolve(&FileWatsonxConfig::default(), full_env).unwrap();
        assert_eq!(creds.api_key, "env-key");
        assert_eq!(creds.url, "https://env.example.com");
    }

    #[test]
    fn test_config_wins_over_environment() {
        let config = FileWatsonxConfig {
            project_id: Some("cfg-project".to_string()),
            ..Default::default()
        };
        let creds = WatsonxCredentials::resolve(&config, full_env).unwrap();
        assert_eq!(creds.project_id, "cfg-project");
        assert_eq!(creds.api_key, "env-key");
    }

    #[test]
    fn test_reports_every_missing_value() {
        let config = FileWatsonxConfig {
            url: Some("https://us-south.ml.cloud.ibm.com".to_string()),
            ..Default::default()
        };
        let err = WatsonxCredentials::resolve(&config, no_env).unwrap_err();
        match err {
            WatsonxError::MissingCredentials(missing) => {
                assert_eq!(missing, vec![ENV_API_KEY, ENV_PROJECT_ID]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = WatsonxCredentials::resolve(&FileWatsonxConfig::default(), full_env).unwrap();
        assert!(!format!("{:?}", creds).contains("env-key"));
    }
}
