// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session controller governing the submission lifecycle.
//!
//! Each submission moves Idle -> InFlight -> Idle. Exactly one submission may
//! be in flight at a time; overlapping submissions are dropped, matching the
//! disabled-submit behavior of the service's reference UI. Outcomes
//! accumulate into a bounded, time-ordered history.

use std::sync::Arc;

use mixroute_core::{MixrouteError, RouteRequest, RouteResult, RouteTransport};
use strum::Display;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::history::SessionHistory;

/// Lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SessionPhase {
    /// Ready to accept a submission.
    #[default]
    Idle,
    /// A submission has been dispatched and not yet resolved.
    InFlight,
}

/// Observable state of one client session.
///
/// Owned exclusively by the controller; external readers obtain clones via
/// [`SessionController::snapshot`] and never mutate it directly.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Current lifecycle phase.
    pub phase: SessionPhase,
    /// Message of the most recent failure. Cleared when a new submission is
    /// dispatched; a subsequent success leaves it cleared.
    pub last_error: Option<String>,
    /// Most recent successful decision. A later failure does not clear it.
    pub last_result: Option<RouteResult>,
    /// Bounded FIFO of successful decisions, oldest first.
    pub history: SessionHistory,
}

impl SessionState {
    /// Whether a submission is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.phase == SessionPhase::InFlight
    }
}

/// Owns the submission lifecycle and the session's decision history.
///
/// All failures are terminal here: [`submit`] never returns an error, it
/// updates the observable state instead.
///
/// [`submit`]: SessionController::submit
pub struct SessionController {
    transport: Arc<dyn RouteTransport>,
    state: Mutex<SessionState>,
}

impl SessionController {
    /// Creates an idle controller with an empty history.
    pub fn new(transport: Arc<dyn RouteTransport>) -> Self {
        Self {
            transport,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Submits one routing request.
    ///
    /// Silently refuses when the query is empty after trimming or when a
    /// submission is already in flight; neither case dispatches or changes
    /// state. The in-flight phase always ends when the transport resolves,
    /// on the success and the failure path alike.
    pub async fn submit(&self, request: RouteRequest) {
        if !request.has_query() {
            debug!("submission refused: empty query");
            return;
        }

        // Busy check and phase transition are atomic under one lock
        // acquisition; the lock is not held across the network await.
        {
            let mut state = self.state.lock().await;
            if state.is_busy() {
                debug!("submission dropped: another request is in flight");
                return;
            }
            state.phase = SessionPhase::InFlight;
            state.last_error = None;
        }

        let outcome = self.transport.route(&request).await;

        let mut state = self.state.lock().await;
        match outcome {
            Ok(result) => {
                info!(
                    chosen_model = %result.chosen_model,
                    latency_ms = result.latency_ms,
                    cost_usd = result.cost_usd,
                    "routing decision received"
                );
                state.last_result = Some(result.clone());
                state.history.push(result);
            }
            Err(err) => {
                warn!(error = %err, "routing submission failed");
                state.last_error = Some(surface_message(&err));
            }
        }
        state.phase = SessionPhase::Idle;
    }

    /// Clones the current session state for observation.
    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }
}

/// The message shown for a failed submission.
fn surface_message(err: &MixrouteError) -> String {
    match err {
        MixrouteError::Transport { .. } => err.surface_message(),
        _ => "unknown error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MAX_HISTORY;
    use mixroute_test_utils::{MockTransport, sample_result, sample_result_at};

    fn request(query: &str) -> RouteRequest {
        RouteRequest::new(query, 0.7, 0.5, 0.3)
    }

    fn controller_with(transport: &MockTransport) -> SessionController {
        SessionController::new(Arc::new(transport.clone()))
    }

    #[test]
    fn phase_display_is_lowercase() {
        assert_eq!(SessionPhase::Idle.to_string(), "idle");
        assert_eq!(SessionPhase::InFlight.to_string(), "inflight");
    }

    #[tokio::test]
    async fn successful_submission_updates_result_and_history() {
        let transport = MockTransport::with_results(vec![sample_result(
            "gpt-mini",
            "2026-03-01T10:00:00Z",
        )]);
        let controller = controller_with(&transport);

        controller.submit(request("Summarize X")).await;

        let state = controller.snapshot().await;
        assert!(!state.is_busy());
        assert!(state.last_error.is_none());
        let result = state.last_result.as_ref().unwrap();
        assert_eq!(result.chosen_model, "gpt-mini");
        assert_eq!(result.latency_ms, 120.0);
        assert_eq!(result.cost_usd, 0.002);
        assert_eq!(result.quality_score, 0.81);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history.latest(), state.last_result.as_ref());
    }

    #[tokio::test]
    async fn history_keeps_only_newest_twenty() {
        let transport = MockTransport::with_results(
            (1..=21).map(|i| sample_result_at("m", i)).collect(),
        );
        let controller = controller_with(&transport);

        for _ in 1..=21 {
            controller.submit(request("q")).await;
        }

        let state = controller.snapshot().await;
        assert_eq!(state.history.len(), MAX_HISTORY);
        // First accepted decision evicted; the rest retained in order.
        let stamps: Vec<String> = state
            .history
            .iter()
            .map(|r| r.timestamp.clone())
            .collect();
        let expected: Vec<String> = (2..=21)
            .map(|i| sample_result_at("m", i).timestamp)
            .collect();
        assert_eq!(stamps, expected);
    }

    #[tokio::test]
    async fn overlapping_submission_is_dropped() {
        let (transport, gate) = MockTransport::gated();
        let controller = Arc::new(controller_with(&transport));

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit(request("first")).await })
        };

        // Wait for the first submission to be dispatched and held in flight.
        while transport.calls() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(controller.snapshot().await.is_busy());

        // The second submission must be a no-op: no dispatch, no state change.
        controller.submit(request("second")).await;
        assert_eq!(transport.calls(), 1);
        let state = controller.snapshot().await;
        assert!(state.is_busy());
        assert!(state.last_result.is_none());
        assert!(state.history.is_empty());

        gate.notify_one();
        first.await.unwrap();

        let state = controller.snapshot().await;
        assert!(!state.is_busy());
        assert_eq!(transport.calls(), 1);
        assert_eq!(state.history.len(), 1);
    }

    #[tokio::test]
    async fn controller_returns_idle_after_success_and_failure() {
        let transport = MockTransport::new();
        transport.push_error("boom").await;
        transport
            .push_result(sample_result("m", "2026-03-01T10:00:00Z"))
            .await;
        let controller = controller_with(&transport);

        controller.submit(request("first")).await;
        assert!(!controller.snapshot().await.is_busy());

        controller.submit(request("second")).await;
        assert!(!controller.snapshot().await.is_busy());
    }

    #[tokio::test]
    async fn blank_query_never_dispatches_or_mutates_state() {
        let transport = MockTransport::new();
        let controller = controller_with(&transport);

        controller.submit(request("   ")).await;
        controller.submit(request("")).await;

        assert_eq!(transport.calls(), 0);
        let state = controller.snapshot().await;
        assert!(!state.is_busy());
        assert!(state.last_error.is_none());
        assert!(state.last_result.is_none());
        assert!(state.history.is_empty());
    }

    #[tokio::test]
    async fn next_success_clears_previous_error() {
        let transport = MockTransport::new();
        transport.push_error("overloaded").await;
        transport
            .push_result(sample_result("m", "2026-03-01T10:00:00Z"))
            .await;
        let controller = controller_with(&transport);

        controller.submit(request("first")).await;
        assert_eq!(
            controller.snapshot().await.last_error.as_deref(),
            Some("overloaded")
        );

        controller.submit(request("second")).await;
        let state = controller.snapshot().await;
        assert!(state.last_error.is_none());
        assert!(state.last_result.is_some());
    }

    #[tokio::test]
    async fn failure_surfaces_body_and_leaves_history_alone() {
        let transport = MockTransport::new();
        transport.push_error("overloaded").await;
        let controller = controller_with(&transport);

        controller.submit(request("q")).await;

        let state = controller.snapshot().await;
        assert_eq!(state.last_error.as_deref(), Some("overloaded"));
        assert!(state.history.is_empty());
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn later_failure_keeps_stale_result_visible() {
        let transport = MockTransport::new();
        transport
            .push_result(sample_result("gpt-mini", "2026-03-01T10:00:00Z"))
            .await;
        transport.push_error("overloaded").await;
        let controller = controller_with(&transport);

        controller.submit(request("first")).await;
        controller.submit(request("second")).await;

        let state = controller.snapshot().await;
        assert_eq!(state.last_error.as_deref(), Some("overloaded"));
        // The earlier decision stays observable next to the fresh error.
        assert_eq!(
            state.last_result.as_ref().map(|r| r.chosen_model.as_str()),
            Some("gpt-mini")
        );
        assert_eq!(state.history.len(), 1);
    }
}
