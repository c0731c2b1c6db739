//! Interaction record entity

use crate::task::kind::TaskKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered request parameters kept alongside a record for redisplay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordMetadata(Vec<(String, String)>);

impl RecordMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.push((key.into(), value.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `key: value` pairs joined with commas.
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One successful interaction (Entity)
///
/// Only ever created from a successful inference call, and never changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    task: TaskKind,
    input: String,
    output: String,
    metadata: RecordMetadata,
    created_at: DateTime<Utc>,
}

impl InteractionRecord {
    pub fn new(task: TaskKind, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            task,
            input: input.into(),
            output: output.into(),
            metadata: RecordMetadata::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_metadata(mut self, metadata: RecordMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn task(&self) -> TaskKind {
        self.task
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn metadata(&self) -> &RecordMetadata {
        &self.metadata
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
