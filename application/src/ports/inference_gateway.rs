//! Inference Gateway port
//!
//! Defines the interface for communicating with the hosted text-generation
//! endpoint.

use async_trait::async_trait;
use edupulse_domain::ModelId;
use thiserror::Error;

/// Errors that can occur during inference gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Credentials or endpoint settings are missing or unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway for text generation
///
/// This port defines how the application layer reaches the inference
/// endpoint. Implementations (adapters) live in the infrastructure layer and
/// carry their own model and decoding settings.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Open a client handle for a single call.
    ///
    /// Credentials are resolved here, every time; a missing credential is a
    /// [`GatewayError::Configuration`].
    async fn open_session(&self) -> Result<Box<dyn InferenceSession>, GatewayError>;
}

/// A per-call client handle
#[async_trait]
pub trait InferenceSession: Send + Sync {
    /// The model this handle sends to
    fn model(&self) -> &ModelId;

    /// Send one payload and return every generated text, in endpoint order.
    async fn generate(&self, input: &str) -> Result<Vec<String>, GatewayError>;
}
