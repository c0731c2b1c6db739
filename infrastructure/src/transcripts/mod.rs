//! Transcript store adapters.

mod file_source;

pub use file_source::FileTranscriptSource;
