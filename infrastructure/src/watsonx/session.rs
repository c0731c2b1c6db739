//! watsonx.ai session.
//!
//! A [`WatsonxSession`] is one authenticated client handle: credentials and
//! a bearer token, good for the call it was opened for.

use super::credentials::WatsonxCredentials;
use super::error::{Result, WatsonxError};
use super::protocol::{GENERATION_PATH, GenerationRequest, GenerationResponse, error_message};
use async_trait::async_trait;
use edupulse_application::ports::inference_gateway::{GatewayError, InferenceSession};
use edupulse_domain::{DecodingParams, ModelId};
use tracing::debug;

pub struct WatsonxSession {
    client: reqwest::Client,
    credentials: WatsonxCredentials,
    token: String,
    model: ModelId,
    api_version: String,
    params: DecodingParams,
}

impl WatsonxSession {
    pub(super) fn new(
        client: reqwest::Client,
        credentials: WatsonxCredentials,
        token: String,
        model: ModelId,
        api_version: String,
        params: DecodingParams,
    ) -> Self {
        Self {
            client,
            credentials,
            token,
            model,
            api_version,
            params,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.credentials.url, GENERATION_PATH)
    }

    async fn send(&self, input: &str) -> Result<Vec<String>> {
        let request = GenerationRequest {
            input,
            model_id: self.model.as_str(),
            project_id: &self.credentials.project_id,
            parameters: (&self.params).into(),
        };

        debug!("POST {} ({} chars)", self.endpoint(), input.len());
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("version", self.api_version.as_str())])
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        if !status.is_success() {
            return Err(WatsonxError::Status {
                status: status.as_u16(),
                message: error_message(&raw),
            });
        }

        let parsed: GenerationResponse =
            serde_json::from_str(&raw).map_err(|e| WatsonxError::ParseError {
                error: e.to_string(),
                raw,
            })?;

        if let Some(first) = parsed.results.first() {
            debug!(
                "Generated {:?} tokens (stop reason: {:?})",
                first.generated_token_count, first.stop_reason
            );
        }

        Ok(parsed
            .results
            .into_iter()
            .map(|r| r.generated_text)
            .collect())
    }
}

#[async_trait]
impl InferenceSession for WatsonxSession {
    fn model(&self) -> &ModelId {
        &self.model
    }

    async fn generate(&self, input: &str) -> std::result::Result<Vec<String>, GatewayError> {
        Ok(self.send(input).await?)
    }
}
