//! Task identifiers

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Every prompt-producing action the application offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    LearningAssistant,
    CodeMentor,
    CodeFormat,
    DocumentSummary,
    StudyPlan,
    QuestionAnswer,
    ExampleQuestion,
    MoodSupport,
    GuidedSupport,
    Translate,
    MultiLanguage,
    Vocabulary,
    StudyResource,
    LectureSummary,
}

impl TaskKind {
    pub const ALL: [TaskKind; 14] = [
        TaskKind::LearningAssistant,
        TaskKind::CodeMentor,
        TaskKind::CodeFormat,
        TaskKind::DocumentSummary,
        TaskKind::StudyPlan,
        TaskKind::QuestionAnswer,
        TaskKind::ExampleQuestion,
        TaskKind::MoodSupport,
        TaskKind::GuidedSupport,
        TaskKind::Translate,
        TaskKind::MultiLanguage,
        TaskKind::Vocabulary,
        TaskKind::StudyResource,
        TaskKind::LectureSummary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::LearningAssistant => "learning-assistant",
            TaskKind::CodeMentor => "code-mentor",
            TaskKind::CodeFormat => "code-format",
            TaskKind::DocumentSummary => "document-summary",
            TaskKind::StudyPlan => "study-plan",
            TaskKind::QuestionAnswer => "question-answer",
            TaskKind::ExampleQuestion => "example-question",
            TaskKind::MoodSupport => "mood-support",
            TaskKind::GuidedSupport => "guided-support",
            TaskKind::Translate => "translate",
            TaskKind::MultiLanguage => "multi-language",
            TaskKind::Vocabulary => "vocabulary",
            TaskKind::StudyResource => "study-resource",
            TaskKind::LectureSummary => "lecture-summary",
        }
    }

    /// The history list a finished interaction is filed under.
    ///
    /// Example questions share the Q&A conversation so they feed later
    /// context the same way typed questions do.
    pub fn history_group(&self) -> TaskKind {
        match self {
            TaskKind::ExampleQuestion => TaskKind::QuestionAnswer,
            other => *other,
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        TaskKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| ValidationError::UnknownTask(s.to_string()))
    }
}
