//! Logging infrastructure: structured interaction logging.
//!
//! Provides [`JsonlInteractionLogger`], a JSONL file writer that implements
//! the [`InteractionLogger`](edupulse_application::InteractionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlInteractionLogger;
