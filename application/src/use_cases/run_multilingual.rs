//! Run Multilingual use case.
//!
//! Answers a question asked in any supported language, in any supported
//! language: translate in, answer in English, translate out.

use crate::error::AssistError;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::infer::InferUseCase;
use edupulse_domain::options::Language;
use edupulse_domain::prompt::template::language_field;
use edupulse_domain::{
    Choice, InteractionRecord, PromptBuilder, PromptSpec, SessionState, TaskFields, TaskKind,
};
use tracing::{debug, info};

/// Use case for the multi-language Q&A.
///
/// Makes one to three inference calls depending on whether the input and
/// output languages are English, and files a single `multi-language`
/// record holding the original question and the final answer.
#[derive(Clone)]
pub struct RunMultilingualUseCase {
    infer: InferUseCase,
}

impl RunMultilingualUseCase {
    pub fn new(infer: InferUseCase) -> Self {
        Self { infer }
    }

    pub async fn execute(
        &self,
        fields: TaskFields,
        state: &mut SessionState,
        progress: &dyn ProgressNotifier,
    ) -> Result<InteractionRecord, AssistError> {
        // Validates the question and both languages before any call.
        let prepared = PromptBuilder::prepare(TaskKind::MultiLanguage, &fields)?;
        let input_language = language_field(&fields, "input_language")?;
        let output_language = language_field(&fields, "output_language")?;
        info!(
            "Multi-language question: {} -> {}",
            input_language, output_language
        );

        let question = if input_language.is_english() {
            prepared.input.clone()
        } else {
            self.translate(&prepared.input, input_language, Language::English, progress)
                .await?
        };

        let answer_fields = TaskFields::new().with("question", question);
        let spec = PromptBuilder::build(TaskKind::MultiLanguage, &answer_fields)?;
        let answer = self.step(&spec, "answering", progress).await?;

        let answer = if output_language.is_english() {
            answer
        } else {
            self.translate(&answer, Language::English, output_language, progress)
                .await?
        };

        let record = InteractionRecord::new(TaskKind::MultiLanguage, prepared.input, answer)
            .with_metadata(prepared.metadata);
        state.record(record.clone());
        Ok(record)
    }

    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, AssistError> {
        debug!("Translating {} chars from {} to {}", text.len(), from, to);
        let fields = TaskFields::new()
            .with("text", text)
            .with("from", from.label())
            .with("to", to.label());
        let spec = PromptBuilder::build(TaskKind::Translate, &fields)?;
        self.step(&spec, &format!("translating to {}", to), progress)
            .await
    }

    async fn step(
        &self,
        spec: &PromptSpec,
        step: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, AssistError> {
        progress.on_request_start(TaskKind::MultiLanguage, step);
        let result = self.infer.infer(spec).await;
        progress.on_request_complete(TaskKind::MultiLanguage, result.is_ok());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inference_gateway::GatewayError;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::testing::MockGateway;
    use std::sync::Arc;

    fn use_case(gateway: &Arc<MockGateway>) -> RunMultilingualUseCase {
        RunMultilingualUseCase::new(InferUseCase::new(gateway.clone()))
    }

    #[tokio::test]
    async fn test_english_to_english_is_one_call() {
        let gateway = Arc::new(MockGateway::answering(&["Because of Rayleigh scattering."]));
        let mut state = SessionState::new();

        let record = use_case(&gateway)
            .execute(
                TaskFields::new().with("question", "Why is the sky blue?"),
                &mut state,
                &NoProgress,
            )
            .await
            .unwrap();

        assert_eq!(gateway.calls(), 1);
        assert_eq!(
            gateway.payloads()[0],
            "Question: Why is the sky blue?\nPlease provide a clear and detailed answer."
        );
        assert_eq!(record.output(), "Because of Rayleigh scattering.");
        assert_eq!(record.metadata().get("input_language"), Some("English"));
    }

    #[tokio::test]
    async fn test_translates_in_and_out() {
        let gateway = Arc::new(MockGateway::answering(&[
            "Why is the sky blue?",
            "Because of Rayleigh scattering.",
            "Debido a la dispersión de Rayleigh.",
        ]));
        let mut state = SessionState::new();

        let record = use_case(&gateway)
            .execute(
                TaskFields::new()
                    .with("question", "¿Por qué el cielo es azul?")
                    .with("input_language", "Spanish")
                    .with("output_language", "es"),
                &mut state,
                &NoProgress,
            )
            .await
            .unwrap();

        let payloads = gateway.payloads();
        assert_eq!(payloads.len(), 3);
        assert!(payloads[0].starts_with("Translate the following text from Spanish to English:"));
        assert!(payloads[1].starts_with("Question: Why is the sky blue?"));
        assert!(payloads[2].contains("Because of Rayleigh scattering."));
        assert!(payloads[2].starts_with("Translate the following text from English to Spanish:"));

        assert_eq!(record.input(), "¿Por qué el cielo es azul?");
        assert_eq!(record.output(), "Debido a la dispersión de Rayleigh.");
        assert_eq!(record.metadata().get("output_language"), Some("Spanish"));
        assert_eq!(state.history(TaskKind::MultiLanguage).len(), 1);
    }

    #[tokio::test]
    async fn test_failure_midway_records_nothing() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok(vec!["Why is the sky blue?".to_string()]),
            Err(GatewayError::Timeout),
        ]));
        let mut state = SessionState::new();

        let err = use_case(&gateway)
            .execute(
                TaskFields::new()
                    .with("question", "Pourquoi le ciel est-il bleu ?")
                    .with("input_language", "French"),
                &mut state,
                &NoProgress,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AssistError::Inference(_)));
        assert_eq!(gateway.calls(), 2);
        assert_eq!(state.total(), 0);
    }

    #[tokio::test]
    async fn test_unknown_language_makes_no_call() {
        let gateway = Arc::new(MockGateway::answering(&["unused"]));
        let mut state = SessionState::new();

        let err = use_case(&gateway)
            .execute(
                TaskFields::new()
                    .with("question", "Hello?")
                    .with("output_language", "Klingon"),
                &mut state,
                &NoProgress,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AssistError::Validation(_)));
        assert_eq!(gateway.calls(), 0);
    }
}
