//! Lecture transcript value objects.
//!
//! Transcripts arrive as ordered, timed fragments; summarization only needs
//! their text joined into one blob.

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// One timed caption fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptFragment {
    pub text: String,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub duration: f64,
}

impl TranscriptFragment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Join fragment texts with single spaces, in order.
pub fn join_fragments(fragments: &[TranscriptFragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A video identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Extract the identifier from a watch URL (`…youtube.com/watch?v=ID&…`),
    /// a short link (`youtu.be/ID`), or accept a bare identifier.
    pub fn parse(reference: &str) -> Result<Self, ValidationError> {
        let reference = reference.trim();
        let invalid = || ValidationError::InvalidVideoReference(reference.to_string());

        let id = if reference.contains("youtube.com") {
            let (_, rest) = reference.split_once("v=").ok_or_else(invalid)?;
            rest.split('&').next().unwrap_or_default()
        } else if let Some((_, rest)) = reference.split_once("youtu.be/") {
            rest.split(['?', '&', '/']).next().unwrap_or_default()
        } else {
            reference
        };

        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(id.to_string()))
        } else {
            Err(invalid())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_watch_url() {
        let id = VideoId::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_parse_short_url() {
        let id = VideoId::parse("https://youtu.be/abc_DEF-123?si=xyz").unwrap();
        assert_eq!(id.as_str(), "abc_DEF-123");
    }

    #[test]
    fn test_parse_bare_id() {
        assert_eq!(VideoId::parse(" abc123 ").unwrap().as_str(), "abc123");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(VideoId::parse("https://www.youtube.com/channel/foo").is_err());
        assert!(VideoId::parse("").is_err());
        assert!(VideoId::parse("not a video").is_err());
    }

    #[test]
    fn test_join_fragments() {
        let fragments = vec![
            TranscriptFragment::new("Welcome to", 0.0, 1.5),
            TranscriptFragment::new("  ", 1.5, 0.2),
            TranscriptFragment::new("lecture three.", 1.7, 2.0),
        ];
        assert_eq!(join_fragments(&fragments), "Welcome to lecture three.");
        assert_eq!(join_fragments(&[]), "");
    }
}
