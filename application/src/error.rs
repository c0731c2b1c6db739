//! Errors surfaced by the use cases.

use crate::ports::inference_gateway::GatewayError;
use crate::ports::transcript_source::TranscriptError;
use edupulse_domain::ValidationError;
use thiserror::Error;

/// Every failure a task can end in.
///
/// All variants are recoverable: the caller reports them and the session
/// carries on with its history untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("No response generated")]
    EmptyResult,
}

impl AssistError {
    /// Short category name for logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            AssistError::Validation(_) => "validation",
            AssistError::Configuration(_) => "configuration",
            AssistError::Inference(_) => "inference",
            AssistError::EmptyResult => "empty_result",
        }
    }
}

impl From<GatewayError> for AssistError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Configuration(message) => AssistError::Configuration(message),
            other => AssistError::Inference(other.to_string()),
        }
    }
}

impl From<TranscriptError> for AssistError {
    fn from(err: TranscriptError) -> Self {
        AssistError::Inference(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_configuration_maps_to_configuration() {
        let err: AssistError = GatewayError::Configuration("WATSONX_APIKEY not set".into()).into();
        assert_eq!(
            err,
            AssistError::Configuration("WATSONX_APIKEY not set".into())
        );
        assert_eq!(err.kind(), "configuration");
    }

    #[test]
    fn test_other_gateway_errors_map_to_inference() {
        let err: AssistError = GatewayError::RequestFailed {
            status: 503,
            message: "unavailable".into(),
        }
        .into();
        assert!(matches!(err, AssistError::Inference(ref m) if m.contains("503")));

        let err: AssistError = GatewayError::Timeout.into();
        assert_eq!(err.kind(), "inference");
    }

    #[test]
    fn test_transcript_errors_are_inference_class() {
        let err: AssistError = TranscriptError::NotFound("abc".into()).into();
        assert!(matches!(err, AssistError::Inference(_)));
    }

    #[test]
    fn test_validation_passes_through() {
        let err: AssistError = ValidationError::missing("question").into();
        assert_eq!(
            err.to_string(),
            "Required field 'question' is missing or empty"
        );
    }
}
