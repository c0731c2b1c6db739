//! Error types for the watsonx.ai adapter

use edupulse_application::GatewayError;
use thiserror::Error;

/// Result type alias for watsonx operations
pub type Result<T> = std::result::Result<T, WatsonxError>;

/// Errors that can occur when talking to watsonx.ai
#[derive(Error, Debug)]
pub enum WatsonxError {
    #[error("Missing watsonx credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token exchange failed (status {status}): {message}")]
    TokenExchange { status: u16, message: String },

    #[error("Endpoint returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },
}

impl From<WatsonxError> for GatewayError {
    fn from(err: WatsonxError) -> Self {
        match err {
            WatsonxError::MissingCredentials(_) | WatsonxError::Client(_) => {
                GatewayError::Configuration(err.to_string())
            }
            WatsonxError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            WatsonxError::Http(e) => GatewayError::Connection(e.to_string()),
            // The IAM endpoint refusing the key is a credentials problem
            WatsonxError::TokenExchange {
                status: 400 | 401 | 403,
                ..
            } => GatewayError::Configuration(err.to_string()),
            WatsonxError::TokenExchange { status, message }
            | WatsonxError::Status { status, message } => {
                GatewayError::RequestFailed { status, message }
            }
            WatsonxError::ParseError { error, .. } => GatewayError::MalformedResponse(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_exchange(status: u16) -> GatewayError {
        WatsonxError::TokenExchange {
            status,
            message: "Provided API key could not be found.".to_string(),
        }
        .into()
    }

    #[test]
    fn test_rejected_key_is_configuration() {
        for status in [400, 401, 403] {
            match token_exchange(status) {
                GatewayError::Configuration(message) => {
                    assert!(message.contains("Provided API key could not be found."));
                }
                other => panic!("unexpected error for {status}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_iam_outage_is_request_failure() {
        assert!(matches!(
            token_exchange(503),
            GatewayError::RequestFailed { status: 503, .. }
        ));
    }

    #[test]
    fn test_generation_status_stays_request_failure() {
        let err: GatewayError = WatsonxError::Status {
            status: 401,
            message: "expired".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::RequestFailed { status: 401, .. }));
    }
}
