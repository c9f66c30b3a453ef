// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded, insertion-ordered history of routing decisions.

use std::collections::VecDeque;

use mixroute_core::RouteResult;

/// Maximum number of decisions retained per session.
pub const MAX_HISTORY: usize = 20;

/// Insertion-ordered FIFO of routing decisions, bounded to [`MAX_HISTORY`].
///
/// Appending at capacity evicts the oldest entry. Iteration order is oldest
/// first, matching the order submissions were accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionHistory {
    entries: VecDeque<RouteResult>,
}

impl SessionHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a decision, evicting the oldest entry when the bound is hit.
    pub fn push(&mut self, result: RouteResult) {
        self.entries.push_back(result);
        if self.entries.len() > MAX_HISTORY {
            self.entries.pop_front();
        }
    }

    /// Number of retained decisions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no decisions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates retained decisions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &RouteResult> {
        self.entries.iter()
    }

    /// The most recently appended decision, if any.
    pub fn latest(&self) -> Option<&RouteResult> {
        self.entries.back()
    }

    /// Mean reported latency across retained decisions.
    pub fn mean_latency_ms(&self) -> Option<f64> {
        self.mean(|r| r.latency_ms)
    }

    /// Mean reported cost across retained decisions.
    pub fn mean_cost_usd(&self) -> Option<f64> {
        self.mean(|r| r.cost_usd)
    }

    /// Mean quality score across retained decisions.
    pub fn mean_quality(&self) -> Option<f64> {
        self.mean(|r| r.quality_score)
    }

    fn mean(&self, field: impl Fn(&RouteResult) -> f64) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.iter().map(field).sum();
        Some(sum / self.entries.len() as f64)
    }
}

impl<'a> IntoIterator for &'a SessionHistory {
    type Item = &'a RouteResult;
    type IntoIter = std::collections::vec_deque::Iter<'a, RouteResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
