//! Session state shared between concurrent requests.

use edupulse_domain::{InteractionRecord, SessionState, TaskKind};
use std::sync::{Mutex, MutexGuard};

/// A [`SessionState`] behind a mutex, so appends from overlapping requests
/// never interleave. Clones of the inner state are cheap enough to hand out
/// for display.
#[derive(Debug, Default)]
pub struct SharedSession {
    state: Mutex<SessionState>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // A panic while holding the lock cannot leave a half-written record.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.lock())
    }

    pub fn record(&self, record: InteractionRecord) {
        self.lock().record(record);
    }

    pub fn clear(&self, task: TaskKind) {
        self.lock().clear(task);
    }

    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }
}
