//! Study resource generator prompts
//!
//! A shared header (resource, subject, level, difficulty, topics) followed by
//! a section specific to the resource kind.

use super::fields::TaskFields;
use super::template::PromptTemplate;
use crate::core::error::ValidationError;
use crate::session::record::RecordMetadata;
use crate::task::options::{
    Choice, Difficulty, EducationLevel, NoteFormat, QuestionType, QuizType, ResourceKind,
};
use std::ops::RangeInclusive;

const QUESTION_COUNT: (i64, RangeInclusive<i64>) = (10, 5..=50);
const TIME_LIMIT: (i64, RangeInclusive<i64>) = (60, 15..=180);
const CARD_COUNT: (i64, RangeInclusive<i64>) = (20, 5..=50);
const DEPTH: (i64, RangeInclusive<i64>) = (2, 1..=4);
const QUIZ_QUESTIONS: (i64, RangeInclusive<i64>) = (10, 5..=30);

/// Kind-specific knobs, resolved and range-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResourceOptions {
    PracticeExam {
        question_count: i64,
        time_limit: i64,
        question_types: Vec<QuestionType>,
    },
    Flashcards {
        card_count: i64,
        include_examples: bool,
    },
    StudyNotes {
        format: NoteFormat,
        include_diagrams: bool,
    },
    MindMap {
        central_topic: String,
        depth: i64,
    },
    Quiz {
        question_count: i64,
        quiz_type: QuizType,
        include_explanations: bool,
    },
}

impl ResourceOptions {
    fn from_fields(kind: ResourceKind, fields: &TaskFields) -> Result<Self, ValidationError> {
        let number = |name: &str, (default, range): (i64, RangeInclusive<i64>)| {
            fields.number(name, default, range)
        };

        Ok(match kind {
            ResourceKind::PracticeExam => ResourceOptions::PracticeExam {
                question_count: number("question_count", QUESTION_COUNT)?,
                time_limit: number("time_limit", TIME_LIMIT)?,
                question_types: fields.choices(
                    "question_types",
                    &[QuestionType::MultipleChoice, QuestionType::ShortAnswer],
                )?,
            },
            ResourceKind::Flashcards => ResourceOptions::Flashcards {
                card_count: number("card_count", CARD_COUNT)?,
                include_examples: fields.flag("include_examples", true)?,
            },
            ResourceKind::StudyNotes => ResourceOptions::StudyNotes {
                format: fields.choice("note_format")?,
                include_diagrams: fields.flag("include_diagrams", true)?,
            },
            ResourceKind::MindMap => ResourceOptions::MindMap {
                central_topic: fields
                    .text("central_topic")
                    .or_else(|| fields.text("subject"))
                    .unwrap_or_default()
                    .to_string(),
                depth: number("depth", DEPTH)?,
            },
            ResourceKind::Quiz => ResourceOptions::Quiz {
                question_count: number("quiz_questions", QUIZ_QUESTIONS)?,
                quiz_type: fields.choice("quiz_type")?,
                include_explanations: fields.flag("include_explanations", true)?,
            },
        })
    }

    fn render(&self) -> String {
        match self {
            ResourceOptions::PracticeExam {
                question_count,
                time_limit,
                question_types,
            } => {
                let types = question_types
                    .iter()
                    .map(|t| t.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    r#"Generate {question_count} questions including {types}.
Time Limit: {time_limit} minutes

Format:
1. Instructions and time limit
2. Questions with clear numbering
3. Answer key with explanations"#
                )
            }
            ResourceOptions::Flashcards {
                card_count,
                include_examples,
            } => {
                let mut out = format!(
                    "Create {card_count} flashcards with:\n1. Term/Question side\n2. Definition/Answer side"
                );
                if *include_examples {
                    out.push_str("\n3. Example usage");
                }
                out.push_str("\n\nFormat each card clearly with \"Front:\" and \"Back:\"");
                out
            }
            ResourceOptions::StudyNotes {
                format,
                include_diagrams,
            } => {
                let mut out = format!(
                    "Create {format} style notes with:\n1. Main concepts\n2. Key points and definitions\n3. Examples and explanations"
                );
                if *include_diagrams {
                    out.push_str("\n4. Relevant diagram descriptions");
                }
                out
            }
            ResourceOptions::MindMap {
                central_topic,
                depth,
            } => format!(
                r#"Create a text-based mind map for "{central_topic}" with:
1. Central concept
2. Main branches (Level 1)
3. Sub-branches up to Level {depth}
4. Key connections and relationships

Use indentation and symbols to show hierarchy."#
            ),
            ResourceOptions::Quiz {
                question_count,
                quiz_type,
                include_explanations,
            } => {
                let mut out = format!("Create a {quiz_type} quiz with {question_count} questions.");
                if *include_explanations {
                    out.push_str("\nInclude detailed explanations for each answer.");
                }
                out.push_str(
                    "\n\nFormat:\n1. Questions clearly numbered\n2. Answer options (if multiple choice)\n3. Correct answers",
                );
                if *include_explanations {
                    out.push_str("\n4. Explanations");
                }
                out
            }
        }
    }
}

pub struct StudyResourcePrompt;

impl PromptTemplate for StudyResourcePrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        let kind = fields.choice::<ResourceKind>("resource")?;
        let subject = fields.require_text("subject")?;
        let education = fields.choice::<EducationLevel>("education")?;
        let difficulty = fields.choice::<Difficulty>("difficulty")?;
        let topics = fields.list("topics");
        if topics.is_empty() {
            return Err(ValidationError::missing("topics"));
        }
        let options = ResourceOptions::from_fields(kind, fields)?;

        Ok(format!(
            "Create a {kind} for {subject} at {education} level.\nDifficulty: {difficulty}\nTopics: {topics}\n\n{details}",
            topics = topics.join(", "),
            details = options.render(),
        ))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        Ok(RecordMetadata::new()
            .with("resource", fields.choice::<ResourceKind>("resource")?)
            .with("education", fields.choice::<EducationLevel>("education")?)
            .with("difficulty", fields.choice::<Difficulty>("difficulty")?))
    }
}
