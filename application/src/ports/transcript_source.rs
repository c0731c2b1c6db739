//! Transcript source port

use async_trait::async_trait;
use edupulse_domain::{TranscriptFragment, VideoId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("No transcript available for video {0}")]
    NotFound(String),

    #[error("Transcript unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed transcript for video {video}: {message}")]
    Malformed { video: String, message: String },
}

/// Looks up the timed transcript of a video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Ordered fragments for the video.
    async fn fetch(&self, video: &VideoId) -> Result<Vec<TranscriptFragment>, TranscriptError>;
}
