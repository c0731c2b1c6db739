//! Append-only interaction history

use super::record::InteractionRecord;
use serde::{Deserialize, Serialize};

/// Ordered, append-only list of interactions for one session.
///
/// The only mutations are [`append`](Self::append) and
/// [`clear`](Self::clear): records are never edited or removed one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHistory {
    records: Vec<InteractionRecord>,
}

impl SessionHistory {
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn append(&mut self, record: InteractionRecord) {
        self.records.push(record);
    }

    /// Drop every record. Clearing an empty history is a no-op.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Most-recent-first view. Each call starts over from the newest record.
    pub fn all(&self) -> std::iter::Rev<std::slice::Iter<'_, InteractionRecord>> {
        self.records.iter().rev()
    }

    pub fn latest(&self) -> Option<&InteractionRecord> {
        self.records.last()
    }

    /// The last `n` records in the order they were added.
    pub fn recent(&self, n: usize) -> &[InteractionRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::kind::TaskKind;

    fn record(input: &str, output: &str) -> InteractionRecord {
        InteractionRecord::new(TaskKind::QuestionAnswer, input, output)
    }

    #[test]
    fn test_append_then_all_returns_newest_first() {
        let mut history = SessionHistory::new();
        history.append(record("first", "1"));
        history.append(record("second", "2"));

        let inputs: Vec<_> = history.all().map(|r| r.input()).collect();
        assert_eq!(inputs, vec!["second", "first"]);
        assert_eq!(history.latest().map(|r| r.output()), Some("2"));
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let mut history = SessionHistory::new();
        history.append(record("X", "Y"));

        let first = history.all().next().unwrap();
        assert_eq!(first.input(), "X");
        assert_eq!(first.output(), "Y");
    }

    #[test]
    fn test_all_is_restartable_and_non_mutating() {
        let mut history = SessionHistory::new();
        history.append(record("a", "1"));
        history.append(record("b", "2"));

        let first_pass: Vec<_> = history.all().map(|r| r.input().to_string()).collect();
        let _partial = history.all().next();
        let second_pass: Vec<_> = history.all().map(|r| r.input().to_string()).collect();

        assert_eq!(first_pass, second_pass);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_clear_after_appends_empties() {
        let mut history = SessionHistory::new();
        for i in 0..5 {
            history.append(record(&i.to_string(), "out"));
        }
        history.clear();
        assert_eq!(history.all().count(), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut history = SessionHistory::new();
        history.append(record("a", "1"));
        history.clear();
        assert!(history.is_empty());
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_recent_is_chronological_tail() {
        let mut history = SessionHistory::new();
        for q in ["q1", "q2", "q3", "q4"] {
            history.append(record(q, "a"));
        }
        let inputs: Vec<_> = history.recent(3).iter().map(|r| r.input()).collect();
        assert_eq!(inputs, vec!["q2", "q3", "q4"]);
        assert_eq!(history.recent(10).len(), 4);
        assert!(SessionHistory::new().recent(3).is_empty());
    }
}
