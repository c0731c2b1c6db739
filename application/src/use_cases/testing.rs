//! Stub adapters shared by the use case tests.

use crate::ports::inference_gateway::{GatewayError, InferenceGateway, InferenceSession};
use crate::ports::transcript_source::{TranscriptError, TranscriptSource};
use async_trait::async_trait;
use edupulse_domain::{ModelId, TranscriptFragment, VideoId};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Gateway that replays queued outcomes and counts what it was asked.
pub(crate) struct MockGateway {
    outcomes: Mutex<VecDeque<Result<Vec<String>, GatewayError>>>,
    open_error: Option<GatewayError>,
    delay: Option<Duration>,
    open_delay: Option<Duration>,
    payloads: Arc<Mutex<Vec<String>>>,
    open_sessions: Arc<AtomicUsize>,
}

impl MockGateway {
    pub(crate) fn new(outcomes: Vec<Result<Vec<String>, GatewayError>>) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::from(outcomes)),
            open_error: None,
            delay: None,
            open_delay: None,
            payloads: Arc::new(Mutex::new(Vec::new())),
            open_sessions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// One successful call per answer.
    pub(crate) fn answering(answers: &[&str]) -> Self {
        Self::new(
            answers
                .iter()
                .map(|a| Ok(vec![a.to_string()]))
                .collect(),
        )
    }

    pub(crate) fn failing_to_open(err: GatewayError) -> Self {
        let mut gateway = Self::new(vec![]);
        gateway.open_error = Some(err);
        gateway
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Stall before handing out a session, like a slow token exchange.
    pub(crate) fn with_open_delay(mut self, delay: Duration) -> Self {
        self.open_delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub(crate) fn payloads(&self) -> Vec<String> {
        self.payloads.lock().unwrap().clone()
    }

    pub(crate) fn open_sessions(&self) -> usize {
        self.open_sessions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceGateway for MockGateway {
    async fn open_session(&self) -> Result<Box<dyn InferenceSession>, GatewayError> {
        if let Some(delay) = self.open_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = &self.open_error {
            return Err(err.clone());
        }
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Connection("no more outcomes".to_string())));
        self.open_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            model: ModelId::default(),
            outcome,
            delay: self.delay,
            payloads: self.payloads.clone(),
            open_sessions: self.open_sessions.clone(),
        }))
    }
}

struct MockSession {
    model: ModelId,
    outcome: Result<Vec<String>, GatewayError>,
    delay: Option<Duration>,
    payloads: Arc<Mutex<Vec<String>>>,
    open_sessions: Arc<AtomicUsize>,
}

#[async_trait]
impl InferenceSession for MockSession {
    fn model(&self) -> &ModelId {
        &self.model
    }

    async fn generate(&self, input: &str) -> Result<Vec<String>, GatewayError> {
        self.payloads.lock().unwrap().push(input.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.open_sessions.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Transcript source backed by a fixed answer.
pub(crate) struct MockTranscripts(pub(crate) Result<Vec<TranscriptFragment>, TranscriptError>);

#[async_trait]
impl TranscriptSource for MockTranscripts {
    async fn fetch(&self, _video: &VideoId) -> Result<Vec<TranscriptFragment>, TranscriptError> {
        self.0.clone()
    }
}
