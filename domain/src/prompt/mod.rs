//! Prompt domain
//!
//! Form fields, per-task templates and the builder that turns them into a
//! single prompt for the inference endpoint.

pub mod builder;
pub mod fields;
pub mod resource;
pub mod spec;
pub mod template;

pub use builder::{PreparedPrompt, PromptBuilder};
pub use fields::{FieldValue, TaskFields};
pub use spec::PromptSpec;
pub use template::PromptTemplate;
