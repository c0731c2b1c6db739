//! Prompt value object

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A prompt ready to be sent to the inference endpoint (Value Object)
///
/// The body is guaranteed non-blank; a blank preamble is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    body: String,
    system_preamble: Option<String>,
}

impl PromptSpec {
    pub fn new(body: impl Into<String>) -> Result<Self, ValidationError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(ValidationError::EmptyBody);
        }
        Ok(Self {
            body,
            system_preamble: None,
        })
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        let preamble = preamble.into();
        self.system_preamble = if preamble.trim().is_empty() {
            None
        } else {
            Some(preamble)
        };
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn system_preamble(&self) -> Option<&str> {
        self.system_preamble.as_deref()
    }

    /// The single payload sent to the endpoint: preamble, a blank line,
    /// then the body. Just the body when there is no preamble.
    pub fn compose(&self) -> String {
        match &self.system_preamble {
            Some(preamble) => format!("{}\n\n{}", preamble, self.body),
            None => self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_rejected() {
        assert_eq!(PromptSpec::new(""), Err(ValidationError::EmptyBody));
        assert_eq!(PromptSpec::new(" \n\t"), Err(ValidationError::EmptyBody));
    }

    #[test]
    fn test_compose_without_preamble() {
        let spec = PromptSpec::new("What is osmosis?").unwrap();
        assert_eq!(spec.compose(), "What is osmosis?");
        assert_eq!(spec.system_preamble(), None);
    }

    #[test]
    fn test_compose_puts_preamble_first() {
        let spec = PromptSpec::new("What is osmosis?")
            .unwrap()
            .with_preamble("You are a biology tutor.");
        assert_eq!(
            spec.compose(),
            "You are a biology tutor.\n\nWhat is osmosis?"
        );
    }

    #[test]
    fn test_blank_preamble_dropped() {
        let spec = PromptSpec::new("body").unwrap().with_preamble("   ");
        assert_eq!(spec.system_preamble(), None);
        assert_eq!(spec.compose(), "body");
    }
}
