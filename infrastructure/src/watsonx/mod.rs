//! IBM watsonx.ai adapter
//!
//! Implements the [`InferenceGateway`](edupulse_application::InferenceGateway)
//! port over the watsonx.ai REST API: an IAM token exchange followed by one
//! text generation request per session.

pub mod credentials;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
