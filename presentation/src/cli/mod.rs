//! Command-line surface: argument definitions and their mapping onto tasks.

pub mod commands;
pub mod request;
