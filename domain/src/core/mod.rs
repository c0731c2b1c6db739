//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`]: identifier of the hosted model
//! - [`error::ValidationError`]: input validation failures
//! - [`string`]: small text helpers

pub mod error;
pub mod model;
pub mod string;
