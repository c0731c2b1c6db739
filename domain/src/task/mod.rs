//! Task domain
//!
//! The catalog of prompt-producing tasks and the option sets their forms offer.

pub mod catalog;
pub mod kind;
pub mod options;

pub use catalog::{
    TaskDefinition, download_file_name, resource_file_name, study_plan_file_name,
};
pub use kind::TaskKind;
pub use options::Choice;
