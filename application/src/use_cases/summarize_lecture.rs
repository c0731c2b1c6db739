//! Summarize Lecture use case.
//!
//! Resolves a video reference, pulls its transcript and runs the
//! `lecture-summary` task over it.

use crate::error::AssistError;
use crate::ports::progress::ProgressNotifier;
use crate::ports::transcript_source::TranscriptSource;
use crate::use_cases::infer::InferUseCase;
use crate::use_cases::run_task::RunTaskUseCase;
use edupulse_domain::core::string::word_count;
use edupulse_domain::{
    InteractionRecord, SessionState, TaskFields, TaskKind, ValidationError, VideoId, join_fragments,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a lecture summary.
#[derive(Debug, Clone)]
pub struct LectureSummary {
    pub video: VideoId,
    pub transcript_words: usize,
    pub record: InteractionRecord,
}

#[derive(Clone)]
pub struct SummarizeLectureUseCase {
    run_task: RunTaskUseCase,
    transcripts: Arc<dyn TranscriptSource>,
}

impl SummarizeLectureUseCase {
    pub fn new(infer: InferUseCase, transcripts: Arc<dyn TranscriptSource>) -> Self {
        Self {
            run_task: RunTaskUseCase::new(infer),
            transcripts,
        }
    }

    /// `fields` must carry `url`; `style` and `length` are passed through to
    /// the summary prompt.
    pub async fn execute(
        &self,
        mut fields: TaskFields,
        state: &mut SessionState,
        progress: &dyn ProgressNotifier,
    ) -> Result<LectureSummary, AssistError> {
        let reference = fields
            .text("url")
            .ok_or_else(|| ValidationError::missing("url"))?;
        let video = VideoId::parse(reference)?;
        info!("Summarizing lecture {}", video);

        progress.on_request_start(TaskKind::LectureSummary, "fetching transcript");
        let fetched = self.transcripts.fetch(&video).await;
        progress.on_request_complete(TaskKind::LectureSummary, fetched.is_ok());
        let transcript = join_fragments(&fetched?);

        let transcript_words = word_count(&transcript);
        debug!("Transcript has {} words", transcript_words);
        if transcript_words == 0 {
            return Err(AssistError::Inference(format!(
                "Transcript for video {} is empty",
                video
            )));
        }

        fields.set("transcript", transcript);
        let record = self
            .run_task
            .execute(TaskKind::LectureSummary, fields, state, progress)
            .await?;

        Ok(LectureSummary {
            video,
            transcript_words,
            record,
        })
    }
}
