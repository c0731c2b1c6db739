//! Infer use case.
//!
//! Sends one composed prompt to the inference endpoint and returns the
//! primary generated text. Every task goes through here.

use crate::config::BehaviorConfig;
use crate::error::AssistError;
use crate::ports::inference_gateway::{GatewayError, InferenceGateway};
use crate::ports::interaction_logger::{InteractionEvent, InteractionLogger, NoInteractionLogger};
use edupulse_domain::PromptSpec;
use edupulse_domain::core::string::truncate;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for a single inference call.
///
/// 1. Compose the payload (preamble, blank line, body)
/// 2. Open a client handle; credentials are resolved here
/// 3. Send exactly once; opening and sending together are bounded by the
///    configured timeout
/// 4. Return the first generated text, or [`AssistError::EmptyResult`] when
///    there is none or it is blank
///
/// The client handle is dropped before returning on every path. There are
/// no retries.
pub struct InferUseCase {
    gateway: Arc<dyn InferenceGateway>,
    behavior: BehaviorConfig,
    interaction_logger: Arc<dyn InteractionLogger>,
}

impl Clone for InferUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            behavior: self.behavior.clone(),
            interaction_logger: self.interaction_logger.clone(),
        }
    }
}

impl InferUseCase {
    pub fn new(gateway: Arc<dyn InferenceGateway>) -> Self {
        Self {
            gateway,
            behavior: BehaviorConfig::default(),
            interaction_logger: Arc::new(NoInteractionLogger),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_interaction_logger(mut self, logger: Arc<dyn InteractionLogger>) -> Self {
        self.interaction_logger = logger;
        self
    }

    pub fn interaction_logger(&self) -> &Arc<dyn InteractionLogger> {
        &self.interaction_logger
    }

    pub async fn infer(&self, spec: &PromptSpec) -> Result<String, AssistError> {
        let payload = spec.compose();
        debug!(
            "Composed payload: {} chars (preamble: {})",
            payload.len(),
            spec.system_preamble().is_some()
        );

        // Opening a session may itself hit the network (token exchange), so
        // the timeout covers it together with the generation call.
        let call = self.open_and_generate(spec, &payload);
        let results = match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.unwrap_or_else(|_| {
                warn!("No response within {:?}", limit);
                Err(GatewayError::Timeout)
            }),
            None => call.await,
        }?;

        debug!("Endpoint returned {} result(s)", results.len());
        let text = results
            .into_iter()
            .next()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                warn!("Endpoint returned no usable text");
                AssistError::EmptyResult
            })?;

        self.interaction_logger.log(InteractionEvent::new(
            "response",
            json!({ "text": text }),
        ));
        Ok(text)
    }

    /// Open a session, send the payload once and release the session.
    async fn open_and_generate(
        &self,
        spec: &PromptSpec,
        payload: &str,
    ) -> Result<Vec<String>, GatewayError> {
        let session = self.gateway.open_session().await.inspect_err(|e| {
            warn!("Could not open inference session: {}", e);
        })?;

        info!("Sending prompt to {}: {}", session.model(), truncate(spec.body(), 80));
        self.interaction_logger.log(InteractionEvent::new(
            "prompt",
            json!({
                "model": session.model().as_str(),
                "payload": payload,
            }),
        ));

        let outcome = session.generate(payload).await;
        drop(session);
        outcome.inspect_err(|e| {
            warn!("Inference call failed: {}", e);
            self.interaction_logger.log(InteractionEvent::new(
                "inference_error",
                json!({ "error": e.to_string() }),
            ));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::MockGateway;
    use std::time::Duration;

    fn spec(body: &str) -> PromptSpec {
        PromptSpec::new(body).unwrap()
    }

    #[tokio::test]
    async fn test_returns_first_result() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(vec![
            "first".to_string(),
            "second".to_string(),
        ])]));
        let use_case = InferUseCase::new(gateway.clone());

        let text = use_case.infer(&spec("Explain gravity")).await.unwrap();
        assert_eq!(text, "first");
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_payload_is_preamble_then_body() {
        let gateway = Arc::new(MockGateway::answering(&["ok"]));
        let use_case = InferUseCase::new(gateway.clone());

        let prompt = spec("What is osmosis?").with_preamble("You are a biology tutor.");
        use_case.infer(&prompt).await.unwrap();

        assert_eq!(
            gateway.payloads(),
            vec!["You are a biology tutor.\n\nWhat is osmosis?".to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_results() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(vec![])]));
        let use_case = InferUseCase::new(gateway.clone());

        let err = use_case.infer(&spec("Explain gravity")).await.unwrap_err();
        assert_eq!(err, AssistError::EmptyResult);
        assert_eq!(err.to_string(), "No response generated");
    }

    #[tokio::test]
    async fn test_missing_credentials_make_no_call() {
        let gateway = Arc::new(MockGateway::failing_to_open(GatewayError::Configuration(
            "WATSONX_PROJECT_ID is not set".to_string(),
        )));
        let use_case = InferUseCase::new(gateway.clone());

        let err = use_case.infer(&spec("Explain gravity")).await.unwrap_err();
        assert!(matches!(err, AssistError::Configuration(_)));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_network_fault_is_inference_error() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Connection(
            "connection refused".to_string(),
        ))]));
        let use_case = InferUseCase::new(gateway.clone());

        let err = use_case.infer(&spec("Explain gravity")).await.unwrap_err();
        assert!(matches!(err, AssistError::Inference(_)));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_session_released_on_every_path() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok(vec!["ok".to_string()]),
            Ok(vec![]),
            Err(GatewayError::Connection("reset".to_string())),
        ]));
        let use_case = InferUseCase::new(gateway.clone());

        for _ in 0..3 {
            let _ = use_case.infer(&spec("body")).await;
            assert_eq!(gateway.open_sessions(), 0);
        }
    }

    #[tokio::test]
    async fn test_timeout_is_inference_error() {
        let gateway = Arc::new(
            MockGateway::answering(&["too late"]).with_delay(Duration::from_secs(10)),
        );
        let use_case = InferUseCase::new(gateway.clone()).with_behavior(BehaviorConfig {
            timeout: Some(Duration::from_millis(20)),
        });

        let err = use_case.infer(&spec("body")).await.unwrap_err();
        assert_eq!(err, AssistError::Inference("Timeout".to_string()));
        assert_eq!(gateway.open_sessions(), 0);
    }

    #[tokio::test]
    async fn test_timeout_covers_slow_session_open() {
        let gateway = Arc::new(
            MockGateway::answering(&["too late"]).with_open_delay(Duration::from_secs(10)),
        );
        let use_case = InferUseCase::new(gateway.clone()).with_behavior(BehaviorConfig {
            timeout: Some(Duration::from_millis(20)),
        });

        let started = std::time::Instant::now();
        let err = use_case.infer(&spec("body")).await.unwrap_err();
        assert_eq!(err, AssistError::Inference("Timeout".to_string()));
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(gateway.calls(), 0);
        assert_eq!(gateway.open_sessions(), 0);
    }

    #[tokio::test]
    async fn test_blank_first_result_is_empty() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(vec![
            "  \n".to_string(),
            "second".to_string(),
        ])]));
        let use_case = InferUseCase::new(gateway.clone());

        let err = use_case.infer(&spec("Explain gravity")).await.unwrap_err();
        assert_eq!(err, AssistError::EmptyResult);
        assert_eq!(gateway.calls(), 1);
    }
}
