//! Interaction log written as JSON lines.
//!
//! Every prompt, response and failed call becomes one line carrying the
//! event `type` and a UTC `timestamp`. There is one file per local day; a
//! session that runs past midnight moves on to the next day's file.

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use edupulse_application::ports::interaction_logger::{InteractionEvent, InteractionLogger};
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

struct OpenLog {
    path: PathBuf,
    day: NaiveDate,
    writer: BufWriter<File>,
}

impl OpenLog {
    fn open(path: PathBuf, day: NaiveDate) -> Option<Self> {
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create interaction log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(Self {
                path,
                day,
                writer: BufWriter::new(file),
            }),
            Err(e) => {
                warn!("Could not open interaction log {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Appends interaction events to `<dir>/<YYYY-MM-DD>.interactions.jsonl`.
///
/// Lines are flushed as they are written. If the next day's file cannot be
/// opened, logging continues in the current one.
pub struct JsonlInteractionLogger {
    dir: PathBuf,
    log: Mutex<OpenLog>,
}

impl JsonlInteractionLogger {
    /// Open today's file in `dir`, appending to whatever it already holds.
    ///
    /// Returns `None` when the file cannot be opened; interaction logging is
    /// then skipped.
    pub fn daily(dir: impl AsRef<Path>) -> Option<Self> {
        let dir = dir.as_ref().to_path_buf();
        let today = Local::now().date_naive();
        let log = OpenLog::open(Self::file_for(&dir, today), today)?;
        Some(Self {
            dir,
            log: Mutex::new(log),
        })
    }

    fn file_for(dir: &Path, day: NaiveDate) -> PathBuf {
        dir.join(format!("{}.interactions.jsonl", day.format("%Y-%m-%d")))
    }

    /// File currently being written.
    pub fn path(&self) -> Option<PathBuf> {
        self.log.lock().ok().map(|log| log.path.clone())
    }

    /// Event payload with `type` and `timestamp` merged in. Payloads that
    /// are not objects go under `data`.
    fn line(event: InteractionEvent, at: DateTime<Utc>) -> Value {
        let timestamp = at.to_rfc3339_opts(SecondsFormat::Millis, true);
        match event.payload {
            Value::Object(mut map) => {
                map.insert("type".to_string(), event.event_type.into());
                map.insert("timestamp".to_string(), timestamp.into());
                Value::Object(map)
            }
            other => serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": other,
            }),
        }
    }

    fn write_at(&self, event: InteractionEvent, now: DateTime<Local>) {
        let Ok(line) = serde_json::to_string(&Self::line(event, now.with_timezone(&Utc))) else {
            return;
        };
        let Ok(mut log) = self.log.lock() else {
            return;
        };

        let today = now.date_naive();
        if log.day != today
            && let Some(next) = OpenLog::open(Self::file_for(&self.dir, today), today)
        {
            let _ = log.writer.flush();
            debug!("Interaction log moved to {}", next.path.display());
            *log = next;
        }

        let _ = writeln!(log.writer, "{}", line);
        let _ = log.writer.flush();
    }
}

impl InteractionLogger for JsonlInteractionLogger {
    fn log(&self, event: InteractionEvent) {
        self.write_at(event, Local::now());
    }
}

impl Drop for JsonlInteractionLogger {
    fn drop(&mut self) {
        if let Ok(mut log) = self.log.lock() {
            let _ = log.writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn local(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn response(text: &str) -> InteractionEvent {
        InteractionEvent::new("response", serde_json::json!({ "text": text }))
    }

    #[test]
    fn test_prompt_and_response_share_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = JsonlInteractionLogger::daily(dir.path().join("logs")).unwrap();
        let now = local(2026, 3, 1, 10);

        logger.write_at(
            InteractionEvent::new(
                "prompt",
                serde_json::json!({
                    "model": "ibm/granite-3-8b-instruct",
                    "payload": "Explain gravity"
                }),
            ),
            now,
        );
        logger.write_at(response("Gravity pulls."), now);
        let path = logger.path().unwrap();
        drop(logger);

        assert_eq!(path, dir.path().join("logs").join("2026-03-01.interactions.jsonl"));
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "prompt");
        assert_eq!(lines[0]["payload"], "Explain gravity");
        assert_eq!(lines[1]["type"], "response");
        assert!(lines.iter().all(|l| l["timestamp"].is_string()));
    }

    #[test]
    fn test_line_keeps_task_metadata_and_wraps_scalars() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let line = JsonlInteractionLogger::line(
            InteractionEvent::new(
                "interaction",
                serde_json::json!({
                    "task": "study-plan",
                    "metadata": { "subject": "Math" }
                }),
            ),
            at,
        );
        assert_eq!(line["task"], "study-plan");
        assert_eq!(line["metadata"]["subject"], "Math");
        assert_eq!(line["timestamp"], "2026-03-01T09:30:00.000Z");

        let line = JsonlInteractionLogger::line(
            InteractionEvent::new("inference_error", serde_json::json!("Timeout")),
            at,
        );
        assert_eq!(line["type"], "inference_error");
        assert_eq!(line["data"], "Timeout");
    }

    #[test]
    fn test_session_past_midnight_moves_to_next_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = JsonlInteractionLogger::daily(dir.path()).unwrap();

        logger.write_at(response("late"), local(2026, 3, 1, 23));
        logger.write_at(response("later"), local(2026, 3, 1, 23));
        logger.write_at(response("early"), local(2026, 3, 2, 1));
        assert_eq!(
            logger.path(),
            Some(dir.path().join("2026-03-02.interactions.jsonl"))
        );
        drop(logger);

        let previous = read_lines(&dir.path().join("2026-03-01.interactions.jsonl"));
        let texts: Vec<_> = previous.iter().map(|l| l["text"].clone()).collect();
        assert_eq!(texts, vec!["late", "later"]);

        let next = read_lines(&dir.path().join("2026-03-02.interactions.jsonl"));
        assert_eq!(next.len(), 1);
        assert_eq!(next[0]["text"], "early");
    }

    #[test]
    fn test_restarting_the_same_day_appends() {
        let dir = tempfile::tempdir().unwrap();
        let now = local(2026, 3, 1, 12);

        for text in ["first", "second"] {
            let logger = JsonlInteractionLogger::daily(dir.path()).unwrap();
            logger.write_at(response(text), now);
        }

        let lines = read_lines(&dir.path().join("2026-03-01.interactions.jsonl"));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["text"], "second");
    }

    #[test]
    fn test_daily_opens_todays_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = JsonlInteractionLogger::daily(dir.path().join("logs")).unwrap();
        logger.log(response("now"));

        let path = logger.path().unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.ends_with(".interactions.jsonl"));
        assert_eq!(name.len(), "YYYY-MM-DD.interactions.jsonl".len());
        drop(logger);
        assert_eq!(read_lines(&path).len(), 1);
    }
}
