//! Port for structured interaction logging.
//!
//! Defines the [`InteractionLogger`] trait for recording what was sent to the
//! inference endpoint and what came back, to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! prompt/response transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured interaction event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. The timestamp is added by the logger when the event is written.
pub struct InteractionEvent {
    /// Event type identifier (e.g., "prompt", "response", "inference_error").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl InteractionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging interaction events to a structured log.
///
/// The `log` method is synchronous and non-fallible; write failures are
/// ignored by implementations.
pub trait InteractionLogger: Send + Sync {
    /// Record an interaction event.
    fn log(&self, event: InteractionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoInteractionLogger;

impl InteractionLogger for NoInteractionLogger {
    fn log(&self, _event: InteractionEvent) {}
}
