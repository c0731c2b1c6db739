//! Transcript store configuration from TOML (`[transcripts]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptsConfig {
    /// Directory holding `<video_id>.json` transcripts; the data directory
    /// when unset
    pub dir: Option<String>,
}
