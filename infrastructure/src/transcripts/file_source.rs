//! Transcript source backed by a directory of JSON files.
//!
//! `<dir>/<video_id>.json` holds an array of
//! `{ "text": ..., "start": ..., "duration": ... }` fragments in playback
//! order.

use async_trait::async_trait;
use edupulse_application::ports::transcript_source::{TranscriptError, TranscriptSource};
use edupulse_domain::{TranscriptFragment, VideoId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileTranscriptSource {
    dir: PathBuf,
}

impl FileTranscriptSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, video: &VideoId) -> PathBuf {
        self.dir.join(format!("{}.json", video.as_str()))
    }
}

#[async_trait]
impl TranscriptSource for FileTranscriptSource {
    async fn fetch(&self, video: &VideoId) -> Result<Vec<TranscriptFragment>, TranscriptError> {
        let path = self.path_for(video);
        debug!("Reading transcript from {}", path.display());

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TranscriptError::NotFound(video.to_string()));
            }
            Err(e) => {
                return Err(TranscriptError::Unavailable(format!(
                    "{}: {}",
                    path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&raw).map_err(|e| TranscriptError::Malformed {
            video: video.to_string(),
            message: e.to_string(),
        })
    }
}
