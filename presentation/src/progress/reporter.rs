//! Progress reporting for task execution

use colored::Colorize;
use edupulse_application::ProgressNotifier;
use edupulse_domain::{TaskDefinition, TaskKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner on stderr while a request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn step_message(step: &str) -> String {
        let mut chars = step.chars();
        match chars.next() {
            Some(first) => format!("{}{}...", first.to_uppercase(), chars.as_str()),
            None => "Working...".to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, task: TaskKind, step: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(TaskDefinition::of(task).title);
        pb.set_message(Self::step_message(step));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_request_complete(&self, _task: TaskKind, success: bool) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = slot.take() {
            if success {
                pb.finish_and_clear();
            } else {
                pb.abandon_with_message(format!("{}", "failed".red()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_message() {
        assert_eq!(ProgressReporter::step_message("generating"), "Generating...");
        assert_eq!(
            ProgressReporter::step_message("translating to Spanish"),
            "Translating to Spanish..."
        );
        assert_eq!(ProgressReporter::step_message(""), "Working...");
    }

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_request_start(TaskKind::Translate, "translating");
        reporter.on_request_start(TaskKind::Translate, "answering");
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_request_complete(TaskKind::Translate, true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
