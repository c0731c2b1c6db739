//! Infrastructure layer for EduPulse
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod transcripts;
pub mod watsonx;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileBehaviorConfig, FileConfig, FileGenerationConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig, FileTranscriptsConfig, FileWatsonxConfig,
};
pub use logging::JsonlInteractionLogger;
pub use transcripts::FileTranscriptSource;
pub use watsonx::{
    credentials::WatsonxCredentials,
    error::{Result, WatsonxError},
    gateway::WatsonxGateway,
    session::WatsonxSession,
};
