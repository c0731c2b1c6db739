//! Console output formatter for task results

use colored::Colorize;
use edupulse_application::{AssistError, LectureSummary};
use edupulse_domain::prompt::template::LEARNING_TEMPLATES;
use edupulse_domain::{
    FieldValue, InteractionRecord, SessionHistory, TaskDefinition, TaskFields, TaskKind,
    ValidationError,
};
use serde_json::json;

/// Formats records, notices and session listings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title, request parameters, then the generated text
    pub fn format_record(record: &InteractionRecord) -> String {
        let def = TaskDefinition::of(record.task());
        let mut output = String::new();

        output.push_str(&Self::header(def.title));
        output.push('\n');

        if !record.metadata().is_empty() {
            for (key, value) in record.metadata().iter() {
                output.push_str(&format!("{} {}\n", format!("{}:", key).dimmed(), value));
            }
            output.push('\n');
        }

        output.push_str(record.output().trim_end());
        output.push('\n');
        output
    }

    pub fn format_record_json(record: &InteractionRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_lecture(summary: &LectureSummary) -> String {
        let mut output = format!(
            "{} {} ({} transcript words)\n\n",
            "Video:".cyan().bold(),
            summary.video,
            summary.transcript_words
        );
        output.push_str(&Self::format_record(&summary.record));
        output
    }

    pub fn format_lecture_json(summary: &LectureSummary) -> String {
        let value = json!({
            "video": summary.video,
            "transcript_words": summary.transcript_words,
            "record": summary.record,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line notice for a failed task.
    ///
    /// Input problems are warnings the user can fix in place; the rest are
    /// errors.
    pub fn format_notice(err: &AssistError) -> String {
        match err {
            AssistError::Validation(ValidationError::MissingField { field }) => format!(
                "{} Please fill in '{}' before submitting.",
                "Warning:".yellow().bold(),
                field
            ),
            AssistError::Validation(e) => format!("{} {}", "Warning:".yellow().bold(), e),
            AssistError::EmptyResult => format!(
                "{} The model returned no response. Try rephrasing your request.",
                "Warning:".yellow().bold()
            ),
            AssistError::Configuration(message) => format!(
                "{} {}\nSet WATSONX_APIKEY, WATSONX_PROJECT_ID and WATSONX_URL or add them to the [watsonx] config section.",
                "Configuration error:".red().bold(),
                message
            ),
            AssistError::Inference(message) => {
                format!("{} {}", "Error:".red().bold(), message)
            }
        }
    }

    pub fn format_notice_json(err: &AssistError) -> String {
        let value = json!({
            "error": err.kind(),
            "message": err.to_string(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Previous interactions for one task, newest first.
    pub fn format_history(kind: TaskKind, history: &SessionHistory) -> String {
        let title = TaskDefinition::of(kind).title;
        if history.is_empty() {
            return format!("{}\n", format!("No {} history yet.", title).dimmed());
        }

        let mut output = format!(
            "{} ({} entries)\n",
            format!("{} history", title).cyan().bold(),
            history.len()
        );
        for (i, record) in history.all().enumerate() {
            output.push_str(&format!(
                "\n{} {} {}\n",
                format!("#{}", history.len() - i).yellow().bold(),
                record.created_at().format("%H:%M:%S").to_string().dimmed(),
                first_line(record.input(), 70)
            ));
            output.push_str(&Self::indent(record.output().trim_end(), "  "));
            output.push('\n');
        }
        output
    }

    /// Catalog listing with the current task marked.
    pub fn format_task_list(current: TaskKind) -> String {
        let mut output = format!("{}\n", "Tasks:".bold());
        for def in TaskDefinition::all() {
            let marker = if def.kind == current { "*" } else { " " };
            output.push_str(&format!(
                " {} {:<20} {}\n",
                marker.green().bold(),
                def.kind.as_str().cyan(),
                def.description
            ));
        }
        output
    }

    /// Numbered quick templates for the learning assistant.
    pub fn format_templates() -> String {
        let mut output = format!("{}\n", "Quick templates:".bold());
        for (i, (name, template)) in LEARNING_TEMPLATES.iter().enumerate() {
            output.push_str(&format!(" {}. {:<24} {}\n", i + 1, name.cyan(), template.dimmed()));
        }
        output
    }

    /// Fields set for the current task, with the required ones flagged.
    pub fn format_fields(kind: TaskKind, fields: &TaskFields) -> String {
        let def = TaskDefinition::of(kind);
        let mut output = format!("{} {}\n", "Task:".bold(), def.kind.as_str().cyan());

        for name in def.required {
            if !fields.is_filled(name) {
                output.push_str(&format!("  {} {}\n", name, "(required, not set)".yellow()));
            }
        }
        for (name, value) in fields.iter() {
            let shown = match value {
                FieldValue::Text(s) => first_line(s, 60),
                other => other.to_string(),
            };
            output.push_str(&format!("  {} = {}\n", name, shown));
        }
        output
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

/// First line of `text`, cut to `max` characters.
fn first_line(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > max || text.lines().nth(1).is_some() {
        let cut: String = line.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupulse_domain::RecordMetadata;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_templates_are_numbered_from_one() {
        plain();
        let text = ConsoleFormatter::format_templates();
        assert!(text.contains(" 1. Create a learning plan"));
        assert!(text.contains(" 4. Find resources"));
        assert!(text.contains("[CONCEPT]"));
    }

    #[test]
    fn test_record_shows_metadata_and_output() {
        plain();
        let record = InteractionRecord::new(TaskKind::MoodSupport, "mood: Good", "Keep it up!")
            .with_metadata(RecordMetadata::new().with("mood", "Good").with("stress", "2/10"));

        let text = ConsoleFormatter::format_record(&record);
        assert!(text.contains("Mood Check-in"));
        assert!(text.contains("mood: Good\nstress: 2/10\n"));
        assert!(text.ends_with("Keep it up!\n"));
    }

    #[test]
    fn test_record_json_round_trips() {
        let record = InteractionRecord::new(TaskKind::Translate, "Hello", "Hola");
        let json = ConsoleFormatter::format_record_json(&record);
        let back: InteractionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_missing_field_notice() {
        plain();
        let err = AssistError::Validation(ValidationError::missing("goal"));
        assert_eq!(
            ConsoleFormatter::format_notice(&err),
            "Warning: Please fill in 'goal' before submitting."
        );
    }

    #[test]
    fn test_notice_json_has_kind() {
        let json = ConsoleFormatter::format_notice_json(&AssistError::EmptyResult);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "empty_result");
        assert_eq!(value["message"], "No response generated");
    }

    #[test]
    fn test_history_newest_first() {
        plain();
        let mut history = SessionHistory::new();
        history.append(InteractionRecord::new(TaskKind::QuestionAnswer, "first q", "first a"));
        history.append(InteractionRecord::new(TaskKind::QuestionAnswer, "second q", "second a"));

        let text = ConsoleFormatter::format_history(TaskKind::QuestionAnswer, &history);
        let second = text.find("second q").unwrap();
        let first = text.find("first q").unwrap();
        assert!(second < first);
        assert!(text.contains("#2"));
    }

    #[test]
    fn test_fields_flag_missing_required() {
        plain();
        let fields = TaskFields::new().with("subject", "Math");
        let text = ConsoleFormatter::format_fields(TaskKind::StudyPlan, &fields);
        assert!(text.contains("goal (required, not set)"));
        assert!(!text.contains("subject (required"));
        assert!(text.contains("subject = Math"));
    }

    #[test]
    fn test_first_line_truncates() {
        assert_eq!(first_line("short", 10), "short");
        assert_eq!(first_line("line one\nline two", 20), "line one...");
        assert_eq!(first_line("abcdefghij", 4), "abcd...");
    }
}
