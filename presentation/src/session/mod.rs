//! Interactive session mode

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::{RunOutcome, SessionRepl};
