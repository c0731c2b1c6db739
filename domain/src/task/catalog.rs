//! Task catalog
//!
//! One definition per [`TaskKind`]: what the task is called, which fields it
//! cannot run without, which field is stored as the record's input, and the
//! template that renders its prompt.

use super::kind::TaskKind;
use crate::core::string::file_slug;
use crate::session::record::InteractionRecord;
use crate::prompt::resource::StudyResourcePrompt;
use crate::prompt::template::{
    CodeFormatPrompt, CodeMentorPrompt, DocumentSummaryPrompt, ExampleQuestionPrompt,
    GuidedSupportPrompt, LearningAssistantPrompt, LectureSummaryPrompt, MoodSupportPrompt,
    MultiLanguagePrompt, PromptTemplate, QuestionAnswerPrompt, StudyPlanPrompt, TranslatePrompt,
    VocabularyPrompt,
};

pub struct TaskDefinition {
    pub kind: TaskKind,
    pub title: &'static str,
    pub description: &'static str,
    /// Fields that must be filled in before any prompt is built.
    pub required: &'static [&'static str],
    /// Field stored as the record's input; the metadata summary otherwise.
    pub input_field: Option<&'static str>,
    /// Number of earlier interactions injected as context (0 = none).
    pub history_context: usize,
    pub template: &'static dyn PromptTemplate,
}

impl std::fmt::Debug for TaskDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskDefinition")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("required", &self.required)
            .field("input_field", &self.input_field)
            .field("history_context", &self.history_context)
            .finish_non_exhaustive()
    }
}

static CATALOG: [TaskDefinition; 14] = [
    TaskDefinition {
        kind: TaskKind::LearningAssistant,
        title: "Learning Assistant",
        description: "Personalized learning guidance and study strategies",
        required: &["question"],
        input_field: Some("question"),
        history_context: 0,
        template: &LearningAssistantPrompt,
    },
    TaskDefinition {
        kind: TaskKind::CodeMentor,
        title: "Coding Mentor",
        description: "Review, debug or explain a piece of code",
        required: &["code"],
        input_field: Some("code"),
        history_context: 0,
        template: &CodeMentorPrompt,
    },
    TaskDefinition {
        kind: TaskKind::CodeFormat,
        title: "Code Formatter",
        description: "Reformat code with proper indentation and style",
        required: &["code"],
        input_field: Some("code"),
        history_context: 0,
        template: &CodeFormatPrompt,
    },
    TaskDefinition {
        kind: TaskKind::DocumentSummary,
        title: "Document Summarizer",
        description: "Summarize a document in a chosen style and length",
        required: &["document"],
        input_field: Some("document"),
        history_context: 0,
        template: &DocumentSummaryPrompt,
    },
    TaskDefinition {
        kind: TaskKind::StudyPlan,
        title: "Study Planner",
        description: "Build a structured study plan",
        required: &["subject", "goal"],
        input_field: Some("subject"),
        history_context: 0,
        template: &StudyPlanPrompt,
    },
    TaskDefinition {
        kind: TaskKind::QuestionAnswer,
        title: "Q&A",
        description: "Ask a question, with earlier questions as context",
        required: &["question"],
        input_field: Some("question"),
        history_context: 3,
        template: &QuestionAnswerPrompt,
    },
    TaskDefinition {
        kind: TaskKind::ExampleQuestion,
        title: "Example Question",
        description: "Answer one of the ready-made questions",
        required: &["question"],
        input_field: Some("question"),
        history_context: 0,
        template: &ExampleQuestionPrompt,
    },
    TaskDefinition {
        kind: TaskKind::MoodSupport,
        title: "Mood Check-in",
        description: "Supportive message and coping strategies for the current mood",
        required: &[],
        input_field: None,
        history_context: 0,
        template: &MoodSupportPrompt,
    },
    TaskDefinition {
        kind: TaskKind::GuidedSupport,
        title: "Guided Support",
        description: "Practical advice on a common student challenge",
        required: &[],
        input_field: None,
        history_context: 0,
        template: &GuidedSupportPrompt,
    },
    TaskDefinition {
        kind: TaskKind::Translate,
        title: "Translator",
        description: "Translate text between supported languages",
        required: &["text", "to"],
        input_field: Some("text"),
        history_context: 0,
        template: &TranslatePrompt,
    },
    TaskDefinition {
        kind: TaskKind::MultiLanguage,
        title: "Multi-language Q&A",
        description: "Ask in one language, get the answer in another",
        required: &["question"],
        input_field: Some("question"),
        history_context: 0,
        template: &MultiLanguagePrompt,
    },
    TaskDefinition {
        kind: TaskKind::Vocabulary,
        title: "Vocabulary Builder",
        description: "Ten key terms for a topic with translations and examples",
        required: &[],
        input_field: None,
        history_context: 0,
        template: &VocabularyPrompt,
    },
    TaskDefinition {
        kind: TaskKind::StudyResource,
        title: "Study Resources",
        description: "Practice exams, flashcards, notes, mind maps and quizzes",
        required: &["subject", "topics"],
        input_field: Some("subject"),
        history_context: 0,
        template: &StudyResourcePrompt,
    },
    TaskDefinition {
        kind: TaskKind::LectureSummary,
        title: "Lecture Summarizer",
        description: "Summarize a lecture transcript",
        required: &["transcript"],
        input_field: None,
        history_context: 0,
        template: &LectureSummaryPrompt,
    },
];

impl TaskDefinition {
    pub fn of(kind: TaskKind) -> &'static TaskDefinition {
        // CATALOG is ordered like TaskKind::ALL
        &CATALOG[kind as usize]
    }

    pub fn all() -> &'static [TaskDefinition] {
        &CATALOG
    }
}

/// Suggested download name for a generated study resource.
pub fn resource_file_name(subject: &str, resource: &str) -> String {
    format!("{}_{}.txt", file_slug(subject), file_slug(resource))
}

/// Suggested download name for a generated study plan.
pub fn study_plan_file_name(subject: &str) -> String {
    format!("study_plan_{}.txt", file_slug(subject))
}

/// Download name for a finished record, for the tasks that offer one.
pub fn download_file_name(record: &InteractionRecord) -> Option<String> {
    match record.task() {
        TaskKind::StudyPlan => Some(study_plan_file_name(record.input())),
        TaskKind::StudyResource => record
            .metadata()
            .get("resource")
            .map(|resource| resource_file_name(record.input(), resource)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::record::RecordMetadata;

    #[test]
    fn test_catalog_order_matches_kinds() {
        for kind in TaskKind::ALL {
            assert_eq!(TaskDefinition::of(kind).kind, kind);
        }
        assert_eq!(TaskDefinition::all().len(), TaskKind::ALL.len());
    }

    #[test]
    fn test_only_question_answer_uses_history() {
        let with_context: Vec<_> = TaskDefinition::all()
            .iter()
            .filter(|d| d.history_context > 0)
            .map(|d| d.kind)
            .collect();
        assert_eq!(with_context, vec![TaskKind::QuestionAnswer]);
        assert_eq!(TaskDefinition::of(TaskKind::QuestionAnswer).history_context, 3);
    }

    #[test]
    fn test_input_field_is_required() {
        for def in TaskDefinition::all() {
            if let Some(field) = def.input_field {
                assert!(def.required.contains(&field), "{:?}", def.kind);
            }
        }
    }

    #[test]
    fn test_download_names() {
        assert_eq!(
            resource_file_name("Organic Chemistry", "Practice Exam"),
            "organic_chemistry_practice_exam.txt"
        );
        assert_eq!(study_plan_file_name("World History"), "study_plan_world_history.txt");
    }

    #[test]
    fn test_download_name_from_record() {
        let plan = InteractionRecord::new(TaskKind::StudyPlan, "World History", "Week 1 ...");
        assert_eq!(
            download_file_name(&plan).as_deref(),
            Some("study_plan_world_history.txt")
        );

        let resource = InteractionRecord::new(TaskKind::StudyResource, "Biology", "Card 1 ...")
            .with_metadata(RecordMetadata::new().with("resource", "Flashcards"));
        assert_eq!(
            download_file_name(&resource).as_deref(),
            Some("biology_flashcards.txt")
        );

        let other = InteractionRecord::new(TaskKind::LearningAssistant, "q", "a");
        assert_eq!(download_file_name(&other), None);
    }
}
