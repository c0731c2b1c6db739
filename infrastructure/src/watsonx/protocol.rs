//! Wire types for the watsonx.ai REST API.
//!
//! - **IAM**: `POST <iam_url>` (form) → `{ access_token, ... }`
//! - **Generation**: `POST <url>/ml/v1/text/generation?version=<v>` (JSON)
//!   → `{ results: [ { generated_text, ... } ] }`

use edupulse_domain::{DecodingMethod, DecodingParams};
use serde::{Deserialize, Serialize};

pub const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
pub const GENERATION_PATH: &str = "/ml/v1/text/generation";

/// IAM token response
#[derive(Debug, Clone, Deserialize)]
pub struct IamToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Text generation request
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest<'a> {
    pub input: &'a str,
    pub model_id: &'a str,
    pub project_id: &'a str,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerationParameters {
    pub decoding_method: DecodingMethod,
    pub temperature: f32,
    pub min_new_tokens: u32,
    pub max_new_tokens: u32,
}

impl From<&DecodingParams> for GenerationParameters {
    fn from(params: &DecodingParams) -> Self {
        Self {
            decoding_method: params.decoding_method,
            temperature: params.temperature,
            min_new_tokens: params.min_new_tokens,
            max_new_tokens: params.max_new_tokens,
        }
    }
}

/// Text generation response. Unknown fields are ignored; a body without
/// `results` fails to parse.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    pub results: Vec<GenerationResult>,
    #[serde(default)]
    pub model_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResult {
    /// Absent text reads as empty
    #[serde(default)]
    pub generated_text: String,
    #[serde(default)]
    pub generated_token_count: Option<u32>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorItem {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

/// Best human-readable message from an error body, falling back to the raw
/// text.
pub fn error_message(raw: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(raw) {
        Ok(body) if !body.errors.is_empty() => body
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; "),
        Ok(ApiErrorBody {
            error_message: Some(message),
            ..
        }) => message,
        _ => raw.trim().to_string(),
    }
}
