//! Output formatting for task results

pub mod console;
pub mod download;
