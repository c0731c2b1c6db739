//! Run Task use case.
//!
//! The single pipeline every catalog task goes through: inject history
//! context, build the prompt, infer, and file the record.

use crate::error::AssistError;
use crate::ports::interaction_logger::InteractionEvent;
use crate::ports::progress::ProgressNotifier;
use crate::session::SharedSession;
use crate::use_cases::infer::InferUseCase;
use edupulse_domain::{
    InteractionRecord, PreparedPrompt, PromptBuilder, SessionState, TaskFields, TaskKind,
};
use serde_json::json;
use tracing::info;

/// Use case for running one catalog task.
///
/// On any error the session history is left exactly as it was.
#[derive(Clone)]
pub struct RunTaskUseCase {
    infer: InferUseCase,
}

impl RunTaskUseCase {
    pub fn new(infer: InferUseCase) -> Self {
        Self { infer }
    }

    pub async fn execute(
        &self,
        kind: TaskKind,
        fields: TaskFields,
        state: &mut SessionState,
        progress: &dyn ProgressNotifier,
    ) -> Result<InteractionRecord, AssistError> {
        let prepared = Self::prepare(kind, fields, state)?;
        let record = self.complete(prepared, progress).await?;
        state.record(record.clone());
        Ok(record)
    }

    /// Same as [`execute`](Self::execute) for a session shared between
    /// concurrent requests. The lock is held only to read context and to
    /// append, never across the inference call.
    pub async fn execute_shared(
        &self,
        kind: TaskKind,
        fields: TaskFields,
        session: &SharedSession,
        progress: &dyn ProgressNotifier,
    ) -> Result<InteractionRecord, AssistError> {
        let prepared = session.read(|state| Self::prepare(kind, fields, state))?;
        let record = self.complete(prepared, progress).await?;
        session.record(record.clone());
        Ok(record)
    }

    fn prepare(
        kind: TaskKind,
        fields: TaskFields,
        state: &SessionState,
    ) -> Result<PreparedPrompt, AssistError> {
        let fields = PromptBuilder::with_history(kind, fields, state);
        Ok(PromptBuilder::prepare(kind, &fields)?)
    }

    async fn complete(
        &self,
        prepared: PreparedPrompt,
        progress: &dyn ProgressNotifier,
    ) -> Result<InteractionRecord, AssistError> {
        let kind = prepared.kind;
        info!("Running task {}", kind);

        progress.on_request_start(kind, "generating");
        let result = self.infer.infer(&prepared.spec).await;
        progress.on_request_complete(kind, result.is_ok());
        let output = result?;

        let record = InteractionRecord::new(kind, prepared.input, output)
            .with_metadata(prepared.metadata);
        self.infer.interaction_logger().log(InteractionEvent::new(
            "interaction",
            json!({
                "task": kind.as_str(),
                "input": record.input(),
                "metadata": record.metadata(),
            }),
        ));
        Ok(record)
    }
}
