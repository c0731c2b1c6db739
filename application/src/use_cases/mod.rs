//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod infer;
pub mod run_multilingual;
pub mod run_task;
pub mod summarize_lecture;

#[cfg(test)]
pub(crate) mod testing;
