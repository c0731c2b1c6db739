//! Application layer for edupulse
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use error::AssistError;
pub use ports::{
    inference_gateway::{GatewayError, InferenceGateway, InferenceSession},
    interaction_logger::{InteractionEvent, InteractionLogger, NoInteractionLogger},
    progress::{NoProgress, ProgressNotifier},
    transcript_source::{TranscriptError, TranscriptSource},
};
pub use session::SharedSession;
pub use use_cases::infer::InferUseCase;
pub use use_cases::run_multilingual::RunMultilingualUseCase;
pub use use_cases::run_task::RunTaskUseCase;
pub use use_cases::summarize_lecture::{LectureSummary, SummarizeLectureUseCase};
