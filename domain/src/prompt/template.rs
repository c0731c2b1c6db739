//! Prompt templates for every task
//!
//! Each template turns validated [`TaskFields`] into a prompt body, an
//! optional system preamble and the metadata kept with the resulting record.
//! Required-field checks happen in the builder before any template runs.

use super::fields::TaskFields;
use crate::core::error::ValidationError;
use crate::session::record::RecordMetadata;
use crate::task::options::{
    Choice, CodingTask, Difficulty, Language, Mood, ProgrammingLanguage, StudyDuration, StudyTime,
    SummaryStyle, SupportTopic, VocabularyTopic,
};

/// Renders one task's prompt from its form fields.
pub trait PromptTemplate: Send + Sync {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError>;

    fn preamble(&self, _fields: &TaskFields) -> Result<Option<String>, ValidationError> {
        Ok(None)
    }

    fn metadata(&self, _fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        Ok(RecordMetadata::new())
    }
}

/// Summary length as a percentage of the original.
const SUMMARY_LENGTH_DEFAULT: i64 = 30;
const SUMMARY_LENGTH_RANGE: std::ops::RangeInclusive<i64> = 10..=50;

fn summary_options(fields: &TaskFields) -> Result<(SummaryStyle, i64), ValidationError> {
    let style = fields.choice::<SummaryStyle>("style")?;
    let length = fields.number("length", SUMMARY_LENGTH_DEFAULT, SUMMARY_LENGTH_RANGE)?;
    Ok((style, length))
}

fn summary_metadata(fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
    let (style, length) = summary_options(fields)?;
    Ok(RecordMetadata::new()
        .with("style", style)
        .with("length", format!("{}%", length)))
}

// ==================== Learning assistant ====================

pub struct LearningAssistantPrompt;

impl PromptTemplate for LearningAssistantPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        Ok(fields.require_text("question")?.to_string())
    }

    fn preamble(&self, _fields: &TaskFields) -> Result<Option<String>, ValidationError> {
        Ok(Some(
            r#"You are an expert educational advisor and learning assistant.
Your role is to provide detailed, personalized learning guidance and support.
Focus on breaking down complex topics, suggesting practical learning strategies,
and creating structured learning plans. Be encouraging and supportive while
maintaining academic rigor."#
                .to_string(),
        ))
    }
}

/// Starter questions offered by the learning assistant; `[TOPIC]`-style
/// placeholders are meant to be edited before sending.
pub const LEARNING_TEMPLATES: [(&str, &str); 4] = [
    (
        "Create a learning plan",
        "Create a detailed learning plan for [TOPIC] including objectives, timeline, and resources.",
    ),
    (
        "Explain a concept",
        "Explain [CONCEPT] in simple terms with examples.",
    ),
    (
        "Study techniques",
        "What are the most effective study techniques for [SUBJECT]?",
    ),
    (
        "Find resources",
        "Suggest learning resources for [TOPIC] including books, courses, and online materials.",
    ),
];

/// Quick template `number` (1-based) with its `[PLACEHOLDER]` replaced by
/// `subject`.
pub fn learning_template(number: usize, subject: &str) -> Result<String, ValidationError> {
    let (_, template) = number
        .checked_sub(1)
        .and_then(|i| LEARNING_TEMPLATES.get(i))
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "template".to_string(),
            value: i64::try_from(number).unwrap_or(i64::MAX),
            min: 1,
            max: LEARNING_TEMPLATES.len() as i64,
        })?;

    let subject = subject.trim();
    if subject.is_empty() {
        return Err(ValidationError::missing("question"));
    }

    Ok(match (template.find('['), template.find(']')) {
        (Some(open), Some(close)) if open < close => {
            format!("{}{}{}", &template[..open], subject, &template[close + 1..])
        }
        _ => template.to_string(),
    })
}

// ==================== Coding mentor ====================

pub struct CodeMentorPrompt;

impl PromptTemplate for CodeMentorPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        Ok(fields.require_text("code")?.to_string())
    }

    fn preamble(&self, fields: &TaskFields) -> Result<Option<String>, ValidationError> {
        let language = fields.choice::<ProgrammingLanguage>("language")?;
        let task = fields.choice::<CodingTask>("task")?;
        Ok(Some(format!(
            r#"You are an expert {language} developer and coding mentor.
Analyze the code based on the selected task type: {task}.
Provide detailed feedback including:
1. Code quality assessment
2. Potential improvements
3. Best practices suggestions
4. Security considerations
5. Performance optimization tips
Format your response in a clear, structured way."#
        )))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        Ok(RecordMetadata::new()
            .with("language", fields.choice::<ProgrammingLanguage>("language")?)
            .with("task", fields.choice::<CodingTask>("task")?))
    }
}

pub struct CodeFormatPrompt;

impl PromptTemplate for CodeFormatPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        let language = fields.choice::<ProgrammingLanguage>("language")?;
        let code = fields.require_text("code")?;
        Ok(format!(
            "Format the following {language} code with proper indentation and style guidelines. \
             Return only the formatted code:\n\n{code}"
        ))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        Ok(RecordMetadata::new().with("language", fields.choice::<ProgrammingLanguage>("language")?))
    }
}

// ==================== Summaries ====================

pub struct DocumentSummaryPrompt;

impl PromptTemplate for DocumentSummaryPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        Ok(fields.require_text("document")?.to_string())
    }

    fn preamble(&self, fields: &TaskFields) -> Result<Option<String>, ValidationError> {
        let (style, length) = summary_options(fields)?;
        Ok(Some(format!(
            r#"You are an expert document summarizer.
Create a {style} summary that is approximately {length}% of the original length.
Focus on key points and maintain coherence.
Format the summary with:
1. Main Points
2. Key Details
3. Important Conclusions
4. Key Terms (if any)

Make the summary clear and well-structured."#,
            style = style.label().to_lowercase(),
        )))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        summary_metadata(fields)
    }
}

pub struct LectureSummaryPrompt;

impl PromptTemplate for LectureSummaryPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        Ok(fields.require_text("transcript")?.to_string())
    }

    fn preamble(&self, fields: &TaskFields) -> Result<Option<String>, ValidationError> {
        let (style, length) = summary_options(fields)?;
        Ok(Some(format!(
            r#"You are an expert in summarizing educational content.
Create a {style} summary that is approximately {length}% of the original length.
Focus on key educational points and maintain clarity.

Format the summary with:
1. Main Concepts
2. Key Points
3. Important Examples
4. Key Terms & Definitions

Make the summary clear and well-structured."#,
            style = style.label().to_lowercase(),
        )))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        let mut metadata = RecordMetadata::new();
        if let Some(url) = fields.text("url") {
            metadata.push("url", url);
        }
        for (k, v) in summary_metadata(fields)?.iter() {
            metadata.push(k, v);
        }
        Ok(metadata)
    }
}

// ==================== Study planner ====================

pub struct StudyPlanPrompt;

impl StudyPlanPrompt {
    const HOURS_DEFAULT: i64 = 10;
    const HOURS_RANGE: std::ops::RangeInclusive<i64> = 1..=40;
}

impl PromptTemplate for StudyPlanPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        let subject = fields.require_text("subject")?;
        let goal = fields.require_text("goal")?;
        let duration = fields.choice::<StudyDuration>("duration")?;
        let level = fields.choice::<Difficulty>("level")?;
        let hours = fields.number("hours", Self::HOURS_DEFAULT, Self::HOURS_RANGE)?;
        let times = fields
            .choices("study_times", &[StudyTime::Afternoon])?
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!(
            r#"Create a detailed study plan based on the following parameters:
Subject: {subject}
Duration: {duration}
Knowledge Level: {level}
Goals: {goal}
Available Hours: {hours} hours per week
Preferred Study Time: {times}

Please provide a structured plan including:
1. Weekly breakdown of topics
2. Daily study schedule
3. Learning milestones
4. Recommended resources
5. Progress tracking metrics"#
        ))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        Ok(RecordMetadata::new()
            .with("duration", fields.choice::<StudyDuration>("duration")?)
            .with("level", fields.choice::<Difficulty>("level")?)
            .with(
                "hours",
                fields.number("hours", Self::HOURS_DEFAULT, Self::HOURS_RANGE)?,
            ))
    }
}

// ==================== Q&A ====================

pub struct QuestionAnswerPrompt;

impl PromptTemplate for QuestionAnswerPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        let question = fields.require_text("question")?;
        let context = fields.text("context").unwrap_or_default();
        Ok(format!(
            r#"Context of previous questions (if any):
{context}

Current question: {question}

Please provide a clear, detailed, and educational answer. Include examples where appropriate."#
        ))
    }
}

/// Render earlier question/answer pairs as prompt context.
pub fn qa_context<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(q, a)| format!("Q: {}\nA: {}", q, a))
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct ExampleQuestionPrompt;

/// Ready-made questions offered next to the Q&A input.
pub const EXAMPLE_QUESTIONS: [&str; 5] = [
    "Explain the concept of photosynthesis in simple terms.",
    "What are the key differences between Python and Java?",
    "How do I solve quadratic equations?",
    "What were the main causes of World War II?",
    "Explain the law of conservation of energy.",
];

impl PromptTemplate for ExampleQuestionPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        let question = fields.require_text("question")?;
        Ok(format!(
            r#"Please provide a clear, detailed, and educational answer to this question:
{question}

Include examples where appropriate and make it easy to understand."#
        ))
    }
}

// ==================== Wellbeing ====================

pub struct MoodSupportPrompt;

impl MoodSupportPrompt {
    const STRESS_DEFAULT: i64 = 5;
    const STRESS_RANGE: std::ops::RangeInclusive<i64> = 0..=10;
}

impl PromptTemplate for MoodSupportPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        let mood = fields.choice::<Mood>("mood")?;
        let stress = fields.number("stress", Self::STRESS_DEFAULT, Self::STRESS_RANGE)?;
        Ok(format!(
            "Based on the user's current mood ({mood}) and stress level ({stress}/10), \
             provide a supportive and encouraging message along with 2-3 practical coping strategies. \
             Keep the tone warm and empathetic."
        ))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        Ok(RecordMetadata::new()
            .with("mood", fields.choice::<Mood>("mood")?)
            .with(
                "stress",
                format!(
                    "{}/10",
                    fields.number("stress", Self::STRESS_DEFAULT, Self::STRESS_RANGE)?
                ),
            ))
    }
}

pub struct GuidedSupportPrompt;

impl PromptTemplate for GuidedSupportPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        let topic = fields.choice::<SupportTopic>("topic")?;
        Ok(format!(
            r#"Provide practical advice and strategies for: {topic}
Include:
1. Understanding the challenge
2. Immediate coping strategies
3. Long-term solutions
4. When to seek additional help
Keep the tone supportive and encouraging."#
        ))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        Ok(RecordMetadata::new().with("topic", fields.choice::<SupportTopic>("topic")?))
    }
}

// ==================== Languages ====================

/// Resolve a language field by label or ISO code, defaulting to English.
pub fn language_field(fields: &TaskFields, name: &str) -> Result<Language, ValidationError> {
    match fields.get(name) {
        None => Ok(Language::default()),
        Some(value) => {
            let raw = value.to_string();
            if raw.trim().is_empty() {
                return Ok(Language::default());
            }
            Language::parse(&raw).ok_or_else(|| ValidationError::InvalidChoice {
                field: name.to_string(),
                value: raw,
                expected: Language::expected(),
            })
        }
    }
}

pub struct TranslatePrompt;

impl PromptTemplate for TranslatePrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        let text = fields.require_text("text")?;
        let from = language_field(fields, "from")?;
        let to = language_field(fields, "to")?;
        Ok(format!(
            r#"Translate the following text from {from} to {to}:

Text: {text}

Provide only the {to} translation without any explanations."#
        ))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        Ok(RecordMetadata::new()
            .with("from", language_field(fields, "from")?)
            .with("to", language_field(fields, "to")?))
    }
}

pub struct MultiLanguagePrompt;

impl PromptTemplate for MultiLanguagePrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        let question = fields.require_text("question")?;
        Ok(format!(
            "Question: {question}\nPlease provide a clear and detailed answer."
        ))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        Ok(RecordMetadata::new()
            .with("input_language", language_field(fields, "input_language")?)
            .with("output_language", language_field(fields, "output_language")?))
    }
}

pub struct VocabularyPrompt;

impl PromptTemplate for VocabularyPrompt {
    fn body(&self, fields: &TaskFields) -> Result<String, ValidationError> {
        let topic = fields.choice::<VocabularyTopic>("topic")?;
        let lang = language_field(fields, "language")?;
        Ok(format!(
            r#"Create a vocabulary list for {topic} with 10 important terms.
For each term, provide:
1. The word in {lang}
2. Its English translation
3. A brief definition in {lang}
4. An example sentence in {lang}"#
        ))
    }

    fn metadata(&self, fields: &TaskFields) -> Result<RecordMetadata, ValidationError> {
        Ok(RecordMetadata::new()
            .with("topic", fields.choice::<VocabularyTopic>("topic")?)
            .with("language", language_field(fields, "language")?))
    }
}
