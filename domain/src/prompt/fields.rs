//! Structured form input for a task.

use crate::core::error::ValidationError;
use crate::task::options::Choice;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A single form value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(i64),
    List(Vec<String>),
    Text(String),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Ordered mapping of field name to value, as collected from a form.
///
/// Accessors are lenient about representation: a number, flag or list may
/// arrive as text (e.g. typed into an interactive session) and is parsed on
/// read. Absent fields fall back to the caller's default; present but
/// unparseable ones are validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    entries: Vec<(String, FieldValue)>,
}

impl TaskFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace a field, keeping its original position on replace.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        let idx = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text value with surrounding whitespace trimmed; `None` when absent,
    /// blank, or not textual.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(FieldValue::Text(s)) if !s.trim().is_empty() => Some(s.trim()),
            _ => None,
        }
    }

    /// Whether the field holds something a user would consider "filled in".
    pub fn is_filled(&self, name: &str) -> bool {
        match self.get(name) {
            Some(FieldValue::Text(s)) => !s.trim().is_empty(),
            Some(FieldValue::List(items)) => items.iter().any(|i| !i.trim().is_empty()),
            Some(FieldValue::Number(_)) | Some(FieldValue::Flag(_)) => true,
            None => false,
        }
    }

    pub fn require_text(&self, name: &str) -> Result<&str, ValidationError> {
        self.text(name).ok_or_else(|| ValidationError::missing(name))
    }

    /// Integer value constrained to `range`; `default` when absent.
    pub fn number(
        &self,
        name: &str,
        default: i64,
        range: RangeInclusive<i64>,
    ) -> Result<i64, ValidationError> {
        let value = match self.get(name) {
            None => return Ok(default),
            Some(FieldValue::Number(n)) => *n,
            Some(FieldValue::Text(s)) if s.trim().is_empty() => return Ok(default),
            Some(FieldValue::Text(s)) => {
                s.trim()
                    .parse::<i64>()
                    .map_err(|_| ValidationError::NotANumber {
                        field: name.to_string(),
                        value: s.clone(),
                    })?
            }
            Some(other) => {
                return Err(ValidationError::NotANumber {
                    field: name.to_string(),
                    value: other.to_string(),
                });
            }
        };

        if range.contains(&value) {
            Ok(value)
        } else {
            Err(ValidationError::OutOfRange {
                field: name.to_string(),
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }

    /// Boolean value; accepts `true/false`, `yes/no`, `on/off`, `1/0` as text.
    pub fn flag(&self, name: &str, default: bool) -> Result<bool, ValidationError> {
        match self.get(name) {
            None => Ok(default),
            Some(FieldValue::Flag(b)) => Ok(*b),
            Some(FieldValue::Text(s)) => match s.trim().to_lowercase().as_str() {
                "" => Ok(default),
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" => Ok(false),
                _ => Err(ValidationError::InvalidChoice {
                    field: name.to_string(),
                    value: s.clone(),
                    expected: "true, false".to_string(),
                }),
            },
            Some(other) => Err(ValidationError::InvalidChoice {
                field: name.to_string(),
                value: other.to_string(),
                expected: "true, false".to_string(),
            }),
        }
    }

    /// List of non-blank items; text is split on commas.
    pub fn list(&self, name: &str) -> Vec<String> {
        let raw: Vec<String> = match self.get(name) {
            Some(FieldValue::List(items)) => items.clone(),
            Some(FieldValue::Text(s)) => s.split(',').map(str::to_string).collect(),
            Some(other) => vec![other.to_string()],
            None => Vec::new(),
        };
        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// A single option; the choice's default when absent or blank.
    pub fn choice<C: Choice>(&self, name: &str) -> Result<C, ValidationError> {
        match self.get(name) {
            None => Ok(C::default()),
            Some(value) => {
                let raw = value.to_string();
                if raw.trim().is_empty() {
                    return Ok(C::default());
                }
                C::from_label(&raw).ok_or_else(|| ValidationError::InvalidChoice {
                    field: name.to_string(),
                    value: raw,
                    expected: C::expected(),
                })
            }
        }
    }

    /// Several options; `default` when absent or empty.
    pub fn choices<C: Choice>(&self, name: &str, default: &[C]) -> Result<Vec<C>, ValidationError> {
        let items = self.list(name);
        if items.is_empty() {
            return Ok(default.to_vec());
        }
        items
            .iter()
            .map(|item| {
                C::from_label(item).ok_or_else(|| ValidationError::InvalidChoice {
                    field: name.to_string(),
                    value: item.clone(),
                    expected: C::expected(),
                })
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for TaskFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = TaskFields::new();
        for (k, v) in iter {
            fields.set(k, v);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::options::{Difficulty, QuestionType, StudyTime};

    #[test]
    fn test_set_replaces_in_place() {
        let mut fields = TaskFields::new().with("a", "1").with("b", "2");
        fields.set("a", "3");
        let keys: Vec<_> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(fields.text("a"), Some("3"));
    }

    #[test]
    fn test_text_treats_blank_as_absent() {
        let fields = TaskFields::new().with("question", "   ");
        assert_eq!(fields.text("question"), None);
        assert!(!fields.is_filled("question"));
        assert_eq!(
            fields.require_text("question"),
            Err(ValidationError::missing("question"))
        );
    }

    #[test]
    fn test_number_parses_text_and_checks_range() {
        let fields = TaskFields::new()
            .with("hours", "12")
            .with("count", 99i64)
            .with("bad", "many");
        assert_eq!(fields.number("hours", 10, 1..=40), Ok(12));
        assert_eq!(fields.number("missing", 10, 1..=40), Ok(10));
        assert!(matches!(
            fields.number("count", 10, 5..=50),
            Err(ValidationError::OutOfRange { value: 99, .. })
        ));
        assert!(matches!(
            fields.number("bad", 10, 1..=40),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_flag_accepts_words() {
        let fields = TaskFields::new()
            .with("a", "yes")
            .with("b", "off")
            .with("c", true)
            .with("d", "maybe");
        assert_eq!(fields.flag("a", false), Ok(true));
        assert_eq!(fields.flag("b", true), Ok(false));
        assert_eq!(fields.flag("c", false), Ok(true));
        assert_eq!(fields.flag("missing", true), Ok(true));
        assert!(fields.flag("d", true).is_err());
    }

    #[test]
    fn test_list_splits_text() {
        let fields = TaskFields::new()
            .with("topics", "cells, , genetics ,evolution")
            .with("times", vec!["Evening".to_string()]);
        assert_eq!(fields.list("topics"), vec!["cells", "genetics", "evolution"]);
        assert_eq!(fields.list("times"), vec!["Evening"]);
        assert!(fields.list("none").is_empty());
    }

    #[test]
    fn test_choice_defaults_and_rejects_unknown() {
        let fields = TaskFields::new()
            .with("difficulty", "advanced")
            .with("level", "godlike");
        assert_eq!(
            fields.choice::<Difficulty>("difficulty"),
            Ok(Difficulty::Advanced)
        );
        assert_eq!(
            fields.choice::<Difficulty>("absent"),
            Ok(Difficulty::Beginner)
        );
        let err = fields.choice::<Difficulty>("level").unwrap_err();
        assert_eq!(err.field(), Some("level"));
    }

    #[test]
    fn test_choices_with_default() {
        let fields = TaskFields::new().with("types", "Essay, true/false");
        assert_eq!(
            fields.choices("types", &[QuestionType::MultipleChoice]),
            Ok(vec![QuestionType::Essay, QuestionType::TrueFalse])
        );
        assert_eq!(
            fields.choices("absent", &[StudyTime::Afternoon]),
            Ok(vec![StudyTime::Afternoon])
        );
    }

    #[test]
    fn test_untagged_json_shape() {
        let fields = TaskFields::new().with("hours", 10i64).with("subject", "Physics");
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["entries"][0][1], 10);
        assert_eq!(json["entries"][1][1], "Physics");
    }
}
