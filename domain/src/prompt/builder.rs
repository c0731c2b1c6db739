//! Prompt building
//!
//! Turns a task kind plus its form fields into a [`PromptSpec`]. Required
//! fields are checked up front so an incomplete form never reaches a
//! template, let alone the inference endpoint.

use super::fields::TaskFields;
use super::spec::PromptSpec;
use super::template::qa_context;
use crate::core::error::ValidationError;
use crate::session::record::RecordMetadata;
use crate::session::state::SessionState;
use crate::task::catalog::TaskDefinition;
use crate::task::kind::TaskKind;

/// A built prompt plus what gets stored with the record once it succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPrompt {
    pub kind: TaskKind,
    pub spec: PromptSpec,
    pub input: String,
    pub metadata: RecordMetadata,
}

pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(kind: TaskKind, fields: &TaskFields) -> Result<PromptSpec, ValidationError> {
        Self::prepare(kind, fields).map(|prepared| prepared.spec)
    }

    pub fn prepare(kind: TaskKind, fields: &TaskFields) -> Result<PreparedPrompt, ValidationError> {
        let def = TaskDefinition::of(kind);

        if let Some(missing) = def.required.iter().find(|name| !fields.is_filled(name)) {
            return Err(ValidationError::missing(*missing));
        }

        let mut spec = PromptSpec::new(def.template.body(fields)?)?;
        if let Some(preamble) = def.template.preamble(fields)? {
            spec = spec.with_preamble(preamble);
        }
        let metadata = def.template.metadata(fields)?;

        let input = def
            .input_field
            .and_then(|name| fields.text(name))
            .map(str::to_string)
            .unwrap_or_else(|| metadata.summary());

        Ok(PreparedPrompt {
            kind,
            spec,
            input,
            metadata,
        })
    }

    /// Fill the `context` field from earlier interactions, for tasks that
    /// take history into account. Leaves the fields untouched otherwise.
    pub fn with_history(kind: TaskKind, mut fields: TaskFields, state: &SessionState) -> TaskFields {
        let depth = TaskDefinition::of(kind).history_context;
        if depth == 0 {
            return fields;
        }
        let recent = state.history(kind.history_group()).recent(depth);
        if !recent.is_empty() {
            let context = qa_context(recent.iter().map(|r| (r.input(), r.output())));
            fields.set("context", context);
        }
        fields
    }
}
