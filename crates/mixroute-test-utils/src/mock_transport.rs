// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock route transport for deterministic testing.
//!
//! `MockTransport` implements `RouteTransport` with pre-scripted outcomes,
//! enabling fast, CI-runnable controller tests without a routing service.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use mixroute_core::{MixrouteError, RouteRequest, RouteResult, RouteTransport};

/// One scripted outcome: a decision or a transport error message.
type Outcome = Result<RouteResult, String>;

/// A mock transport that returns pre-scripted outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty, a default
/// decision is returned. Clones share the same queue, call counter, and gate.
#[derive(Clone)]
pub struct MockTransport {
    outcomes: Arc<Mutex<VecDeque<Outcome>>>,
    calls: Arc<AtomicUsize>,
    gate: Option<Arc<Notify>>,
}

impl MockTransport {
    /// Create a new mock transport with an empty outcome queue.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            gate: None,
        }
    }

    /// Create a mock transport pre-loaded with the given decisions.
    pub fn with_results(results: Vec<RouteResult>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(results.into_iter().map(Ok).collect())),
            calls: Arc::new(AtomicUsize::new(0)),
            gate: None,
        }
    }

    /// Create a gated mock transport: each call blocks until the returned
    /// handle is notified, holding the submission in flight.
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let mut transport = Self::new();
        transport.gate = Some(gate.clone());
        (transport, gate)
    }

    /// Queue a successful decision.
    pub async fn push_result(&self, result: RouteResult) {
        self.outcomes.lock().await.push_back(Ok(result));
    }

    /// Queue a transport failure with the given surface message.
    pub async fn push_error(&self, message: impl Into<String>) {
        self.outcomes.lock().await.push_back(Err(message.into()));
    }

    /// Number of times `route` was dispatched.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn next_outcome(&self) -> Outcome {
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(sample_result("mock-model", "2026-03-01T00:00:00Z")))
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RouteTransport for MockTransport {
    async fn route(&self, _request: &RouteRequest) -> Result<RouteResult, MixrouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.next_outcome().await {
            Ok(result) => Ok(result),
            Err(message) => Err(MixrouteError::Transport {
                message,
                source: None,
            }),
        }
    }
}

/// Builds a plausible decision for tests, keyed by model and timestamp.
pub fn sample_result(chosen_model: &str, timestamp: &str) -> RouteResult {
    RouteResult {
        output_text: format!("output from {chosen_model}"),
        chosen_model: chosen_model.to_string(),
        latency_ms: 120.0,
        cost_usd: 0.002,
        quality_score: 0.81,
        routing_explanation: "scripted decision".to_string(),
        timestamp: timestamp.to_string(),
    }
}

/// Builds a decision stamped `index` seconds into a fixed test minute, so a
/// sequence of results carries strictly increasing, distinct timestamps.
pub fn sample_result_at(chosen_model: &str, index: usize) -> RouteResult {
    let base = chrono::DateTime::parse_from_rfc3339("2026-03-01T10:00:00Z")
        .expect("fixed base timestamp parses");
    let stamped = base + chrono::Duration::seconds(index as i64);
    sample_result(chosen_model, &stamped.to_rfc3339())
}
