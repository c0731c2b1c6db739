//! Presentation layer for EduPulse
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive session.

pub mod cli;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use cli::request::Request;
pub use output::console::ConsoleFormatter;
pub use output::download::save_record;
pub use progress::reporter::ProgressReporter;
pub use session::SessionRepl;
