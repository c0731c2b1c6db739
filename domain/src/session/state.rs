//! Per-session state

use super::history::SessionHistory;
use super::record::InteractionRecord;
use crate::task::kind::TaskKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything one user session owns: an independent history per task.
///
/// Records are filed under [`TaskKind::history_group`], so clearing one
/// task's history never touches another's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    histories: BTreeMap<TaskKind, SessionHistory>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// History for a task; empty if nothing was recorded yet.
    pub fn history(&self, task: TaskKind) -> &SessionHistory {
        static EMPTY: SessionHistory = SessionHistory::new();
        self.histories.get(&task.history_group()).unwrap_or(&EMPTY)
    }

    pub fn record(&mut self, record: InteractionRecord) {
        self.histories
            .entry(record.task().history_group())
            .or_default()
            .append(record);
    }

    pub fn clear(&mut self, task: TaskKind) {
        if let Some(history) = self.histories.get_mut(&task.history_group()) {
            history.clear();
        }
    }

    pub fn clear_all(&mut self) {
        for history in self.histories.values_mut() {
            history.clear();
        }
    }

    /// Total number of records across all tasks.
    pub fn total(&self) -> usize {
        self.histories.values().map(SessionHistory::len).sum()
    }

    /// Tasks that currently have at least one record.
    pub fn active_tasks(&self) -> impl Iterator<Item = TaskKind> + '_ {
        self.histories
            .iter()
            .filter(|(_, h)| !h.is_empty())
            .map(|(k, _)| *k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histories_are_independent() {
        let mut state = SessionState::new();
        state.record(InteractionRecord::new(TaskKind::CodeMentor, "fn main() {}", "ok"));
        state.record(InteractionRecord::new(TaskKind::DocumentSummary, "doc", "sum"));

        state.clear(TaskKind::CodeMentor);

        assert!(state.history(TaskKind::CodeMentor).is_empty());
        assert_eq!(state.history(TaskKind::DocumentSummary).len(), 1);
        assert_eq!(state.total(), 1);
    }

    #[test]
    fn test_example_questions_join_qa_history() {
        let mut state = SessionState::new();
        state.record(InteractionRecord::new(TaskKind::QuestionAnswer, "q1", "a1"));
        state.record(InteractionRecord::new(TaskKind::ExampleQuestion, "q2", "a2"));

        let inputs: Vec<_> = state
            .history(TaskKind::QuestionAnswer)
            .all()
            .map(|r| r.input())
            .collect();
        assert_eq!(inputs, vec!["q2", "q1"]);
        assert_eq!(state.history(TaskKind::ExampleQuestion).len(), 2);
    }

    #[test]
    fn test_unknown_task_history_is_empty() {
        let state = SessionState::new();
        assert!(state.history(TaskKind::Vocabulary).is_empty());
        assert_eq!(state.active_tasks().count(), 0);
    }

    #[test]
    fn test_clear_all() {
        let mut state = SessionState::new();
        state.record(InteractionRecord::new(TaskKind::Translate, "hola", "hello"));
        state.record(InteractionRecord::new(TaskKind::Vocabulary, "Science", "list"));
        state.clear_all();
        assert_eq!(state.total(), 0);
        state.clear_all();
        assert_eq!(state.total(), 0);
    }
}
