//! Model identifier value object

use serde::{Deserialize, Serialize};

/// Identifier of a hosted foundation model (Value Object)
///
/// The gateway passes this through verbatim as the endpoint's `model_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    /// IBM Granite 3 8B Instruct, the model every task was written against.
    pub const GRANITE_3_8B_INSTRUCT: &'static str = "ibm/granite-3-8b-instruct";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self::new(Self::GRANITE_3_8B_INSTRUCT)
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_granite() {
        assert_eq!(ModelId::default().as_str(), "ibm/granite-3-8b-instruct");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ModelId::from("ibm/granite-13b-chat-v2")).unwrap();
        assert_eq!(json, "\"ibm/granite-13b-chat-v2\"");
    }
}
