//! Mapping parsed commands onto task requests

use super::commands::{Command, ResourceArgs, TextInput};
use edupulse_domain::prompt::template::{EXAMPLE_QUESTIONS, learning_template};
use edupulse_domain::{FieldValue, TaskFields, TaskKind};
use std::io;
use std::path::PathBuf;

/// What a single command asks the application to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// One catalog task through the shared pipeline
    Task {
        kind: TaskKind,
        fields: TaskFields,
        /// Directory to write the suggested download file into
        save: Option<PathBuf>,
    },
    /// Question in one language, answer in another
    Multilingual(TaskFields),
    /// Fetch a transcript and summarize it
    Lecture(TaskFields),
    /// Interactive session
    Session { task: Option<TaskKind> },
}

impl Request {
    fn task(kind: TaskKind, fields: TaskFields) -> Self {
        Request::Task {
            kind,
            fields,
            save: None,
        }
    }
}

impl TextInput {
    /// The inline text, or the file's contents.
    pub fn read(&self) -> io::Result<Option<String>> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(Some(text.clone())),
            (None, Some(path)) => std::fs::read_to_string(path).map(Some),
            (None, None) => Ok(None),
        }
    }
}

/// Set `name` only when a value was given.
fn put<V: Into<FieldValue>>(fields: &mut TaskFields, name: &str, value: Option<V>) {
    if let Some(value) = value {
        fields.set(name, value);
    }
}

fn put_list(fields: &mut TaskFields, name: &str, items: Vec<String>) {
    if !items.is_empty() {
        fields.set(name, items);
    }
}

impl ResourceArgs {
    fn into_fields(self) -> TaskFields {
        let mut fields = TaskFields::new();
        put(&mut fields, "subject", self.subject);
        put_list(&mut fields, "topics", self.topics);
        put(&mut fields, "resource", self.resource);
        put(&mut fields, "difficulty", self.difficulty);
        put(&mut fields, "education", self.education);
        put(&mut fields, "question_count", self.question_count);
        put(&mut fields, "time_limit", self.time_limit);
        put_list(&mut fields, "question_types", self.question_types);
        put(&mut fields, "card_count", self.card_count);
        put(&mut fields, "include_examples", self.include_examples);
        put(&mut fields, "note_format", self.note_format);
        put(&mut fields, "include_diagrams", self.include_diagrams);
        put(&mut fields, "central_topic", self.central_topic);
        put(&mut fields, "depth", self.depth);
        put(&mut fields, "quiz_questions", self.quiz_questions);
        put(&mut fields, "quiz_type", self.quiz_type);
        put(&mut fields, "include_explanations", self.include_explanations);
        fields
    }
}

impl Command {
    /// Turn the parsed arguments into task fields.
    ///
    /// Reading `--file` inputs and picking a numbered example or template
    /// can fail here; other missing or invalid values are left for prompt
    /// validation to report.
    pub fn into_request(self) -> io::Result<Request> {
        let mut fields = TaskFields::new();

        let request = match self {
            Command::Learn { question, template } => {
                match template {
                    Some(n) => {
                        let filled = learning_template(n, question.as_deref().unwrap_or_default())
                            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
                        fields.set("question", filled);
                    }
                    None => put(&mut fields, "question", question),
                }
                Request::task(TaskKind::LearningAssistant, fields)
            }
            Command::Code {
                code,
                language,
                task,
            } => {
                put(&mut fields, "code", code.read()?);
                put(&mut fields, "language", language);
                put(&mut fields, "task", task);
                Request::task(TaskKind::CodeMentor, fields)
            }
            Command::FormatCode { code, language } => {
                put(&mut fields, "code", code.read()?);
                put(&mut fields, "language", language);
                Request::task(TaskKind::CodeFormat, fields)
            }
            Command::Summarize {
                document,
                style,
                length,
            } => {
                put(&mut fields, "document", document.read()?);
                put(&mut fields, "style", style);
                put(&mut fields, "length", length);
                Request::task(TaskKind::DocumentSummary, fields)
            }
            Command::Plan {
                subject,
                goal,
                duration,
                level,
                hours,
                study_times,
                save,
            } => {
                put(&mut fields, "subject", subject);
                put(&mut fields, "goal", goal);
                put(&mut fields, "duration", duration);
                put(&mut fields, "level", level);
                put(&mut fields, "hours", hours);
                put_list(&mut fields, "study_times", study_times);
                Request::Task {
                    kind: TaskKind::StudyPlan,
                    fields,
                    save,
                }
            }
            Command::Ask { question, example } => match example {
                Some(n) => {
                    let question = n
                        .checked_sub(1)
                        .and_then(|i| EXAMPLE_QUESTIONS.get(i))
                        .ok_or_else(|| {
                            io::Error::new(
                                io::ErrorKind::InvalidInput,
                                format!(
                                    "--example must be between 1 and {}",
                                    EXAMPLE_QUESTIONS.len()
                                ),
                            )
                        })?;
                    fields.set("question", *question);
                    Request::task(TaskKind::ExampleQuestion, fields)
                }
                None => {
                    put(&mut fields, "question", question);
                    Request::task(TaskKind::QuestionAnswer, fields)
                }
            },
            Command::Support { mood, stress } => {
                put(&mut fields, "mood", mood);
                put(&mut fields, "stress", stress);
                Request::task(TaskKind::MoodSupport, fields)
            }
            Command::Guidance { topic } => {
                put(&mut fields, "topic", topic);
                Request::task(TaskKind::GuidedSupport, fields)
            }
            Command::Translate { text, from, to } => {
                put(&mut fields, "text", text.read()?);
                put(&mut fields, "from", from);
                put(&mut fields, "to", to);
                Request::task(TaskKind::Translate, fields)
            }
            Command::Multilang {
                question,
                input_language,
                output_language,
            } => {
                put(&mut fields, "question", question);
                put(&mut fields, "input_language", input_language);
                put(&mut fields, "output_language", output_language);
                Request::Multilingual(fields)
            }
            Command::Vocab { topic, language } => {
                put(&mut fields, "topic", topic);
                put(&mut fields, "language", language);
                Request::task(TaskKind::Vocabulary, fields)
            }
            Command::Resource(mut args) => {
                let save = args.save.take();
                Request::Task {
                    kind: TaskKind::StudyResource,
                    fields: args.into_fields(),
                    save,
                }
            }
            Command::Lecture { url, style, length } => {
                put(&mut fields, "url", url);
                put(&mut fields, "style", style);
                put(&mut fields, "length", length);
                Request::Lecture(fields)
            }
            Command::Session { task } => Request::Session { task },
        };

        Ok(request)
    }
}
