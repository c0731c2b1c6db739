//! watsonx.ai Inference Gateway implementation

use super::credentials::{EnvLookup, WatsonxCredentials, process_env};
use super::error::{Result, WatsonxError};
use super::protocol::{IAM_GRANT_TYPE, IamToken, error_message};
use super::session::WatsonxSession;
use crate::config::FileWatsonxConfig;
use async_trait::async_trait;
use edupulse_application::ports::inference_gateway::{
    GatewayError, InferenceGateway, InferenceSession,
};
use edupulse_domain::DecodingParams;
use std::time::Duration;
use tracing::{debug, info};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Inference Gateway for IBM watsonx.ai text generation
///
/// Holds only settings and a connection pool. Credentials and the bearer
/// token are fetched each time a session is opened.
pub struct WatsonxGateway {
    client: reqwest::Client,
    config: FileWatsonxConfig,
    params: DecodingParams,
    env: EnvLookup,
}

impl WatsonxGateway {
    pub fn new(config: FileWatsonxConfig, params: DecodingParams) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("edupulse/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WatsonxError::Client(e.to_string()))?;

        info!(
            "WatsonxGateway initialized (model: {}, decoding: {})",
            config.model, params.decoding_method
        );

        Ok(Self {
            client,
            config,
            params,
            env: process_env,
        })
    }

    /// Replace the environment lookup used for credentials not set in config.
    pub fn with_env_lookup(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    async fn exchange_token(&self, api_key: &str) -> Result<String> {
        debug!("Exchanging API key for IAM token at {}", self.config.iam_url);
        let response = self
            .client
            .post(&self.config.iam_url)
            .header("Accept", "application/json")
            .form(&[("grant_type", IAM_GRANT_TYPE), ("apikey", api_key)])
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        if !status.is_success() {
            return Err(WatsonxError::TokenExchange {
                status: status.as_u16(),
                message: error_message(&raw),
            });
        }

        let token: IamToken = serde_json::from_str(&raw).map_err(|e| WatsonxError::ParseError {
            error: e.to_string(),
            raw,
        })?;
        debug!("IAM token acquired (expires in {:?}s)", token.expires_in);
        Ok(token.access_token)
    }

    async fn open(&self) -> Result<WatsonxSession> {
        let credentials = WatsonxCredentials::resolve(&self.config, self.env)?;
        let token = self.exchange_token(&credentials.api_key).await?;

        Ok(WatsonxSession::new(
            self.client.clone(),
            credentials,
            token,
            self.config.model.clone(),
            self.config.api_version.clone(),
            self.params,
        ))
    }
}

#[async_trait]
impl InferenceGateway for WatsonxGateway {
    async fn open_session(&self) -> std::result::Result<Box<dyn InferenceSession>, GatewayError> {
        let session = self.open().await?;
        Ok(Box::new(session))
    }
}
