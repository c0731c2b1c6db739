//! Inference request parameters.

pub mod params;

pub use params::{DecodingMethod, DecodingParams};
