//! Progress notification port
//!
//! Defines the interface for reporting progress while a task waits on the
//! inference endpoint.

use edupulse_domain::TaskKind;

/// Callback for progress updates during task execution
///
/// Implementations live in the presentation layer (spinner, plain log line).
pub trait ProgressNotifier: Send + Sync {
    /// Called before each inference call; `step` names the call for tasks
    /// that make more than one (e.g. "translating question").
    fn on_request_start(&self, task: TaskKind, step: &str);

    /// Called after each inference call, successful or not.
    fn on_request_complete(&self, task: TaskKind, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _task: TaskKind, _step: &str) {}
    fn on_request_complete(&self, _task: TaskKind, _success: bool) {}
}
