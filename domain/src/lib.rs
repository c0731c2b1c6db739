//! Domain layer for edupulse
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tasks
//!
//! Every action the assistant offers (learning guidance, code review,
//! summaries, study plans, Q&A, wellbeing support, translation, study
//! resources) is a [`TaskKind`] with a [`TaskDefinition`] in the catalog.
//!
//! ## Prompts
//!
//! [`PromptBuilder`] validates a task's [`TaskFields`] and renders them into
//! a [`PromptSpec`]: a non-empty body with an optional system preamble.
//!
//! ## Sessions
//!
//! Successful interactions become [`InteractionRecord`]s in the session's
//! per-task [`SessionHistory`], newest first on display.

pub mod config;
pub mod core;
pub mod inference;
pub mod prompt;
pub mod session;
pub mod task;
pub mod transcript;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::ValidationError, model::ModelId};
pub use inference::{DecodingMethod, DecodingParams};
pub use prompt::{FieldValue, PreparedPrompt, PromptBuilder, PromptSpec, PromptTemplate, TaskFields};
pub use session::{
    history::SessionHistory,
    record::{InteractionRecord, RecordMetadata},
    state::SessionState,
};
pub use task::{
    Choice, TaskDefinition, TaskKind, download_file_name, options, resource_file_name,
    study_plan_file_name,
};
pub use transcript::{TranscriptFragment, VideoId, join_fragments};
