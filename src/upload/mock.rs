//! Mock conversion service for tests and offline demos
//!
//! Scripted outcomes are consumed in order, one per `convert` call, so a
//! test can stage success, service-reported error, and transport failure
//! sequences without a network.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::ConversionService;
use crate::error::{Result, ShapeviewError};
use crate::files::FileSet;
use crate::geo::FeatureCollection;

#[derive(Debug, Clone)]
enum ScriptedOutcome {
    Success(FeatureCollection),
    ApplicationError(String),
    TransportError(String),
}

/// Conversion service with a scripted outcome queue.
#[derive(Debug, Default)]
pub struct MockConversionService {
    script: Mutex<VecDeque<ScriptedOutcome>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockConversionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful conversion returning `collection`.
    pub fn then_success(self, collection: FeatureCollection) -> Self {
        self.push(ScriptedOutcome::Success(collection))
    }

    /// Queue a service-reported (application) error.
    pub fn then_application_error(self, message: impl Into<String>) -> Self {
        self.push(ScriptedOutcome::ApplicationError(message.into()))
    }

    /// Queue a transport-level failure.
    pub fn then_transport_error(self, message: impl Into<String>) -> Self {
        self.push(ScriptedOutcome::TransportError(message.into()))
    }

    /// Delay every call, to exercise in-flight orderings.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `convert` calls observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(self, outcome: ScriptedOutcome) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(outcome);
        }
        self
    }
}

impl ConversionService for MockConversionService {
    async fn convert(&self, files: &FileSet) -> Result<FeatureCollection> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(count = files.len(), "mock conversion invoked");

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());

        match next {
            Some(ScriptedOutcome::Success(collection)) => Ok(collection),
            Some(ScriptedOutcome::ApplicationError(message)) => {
                Err(ShapeviewError::Application { message })
            }
            Some(ScriptedOutcome::TransportError(message)) => {
                Err(ShapeviewError::Transport { message })
            }
            None => Err(ShapeviewError::Application {
                message: "mock script exhausted".to_string(),
            }),
        }
    }
}
