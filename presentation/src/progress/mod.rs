//! Progress reporting while waiting on the inference endpoint

pub mod reporter;
