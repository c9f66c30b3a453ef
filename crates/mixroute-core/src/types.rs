// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types shared between the transport adapter and the session controller.
//!
//! Field names on the wire follow the routing service's JSON contract
//! (`user_query`, `importance_*`); the Rust-side names describe what the
//! values mean to this client.

use serde::{Deserialize, Serialize};

/// A routing submission: the user's prompt plus three weighting preferences.
///
/// The weights are independent sliders in `[0, 1]`; they are not required to
/// sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// The prompt to route. Must be non-empty after trimming.
    #[serde(rename = "user_query")]
    pub query: String,

    /// Relative weight given to answer precision.
    #[serde(rename = "importance_precision")]
    pub weight_precision: f64,

    /// Relative weight given to low latency.
    #[serde(rename = "importance_latency")]
    pub weight_latency: f64,

    /// Relative weight given to low cost.
    #[serde(rename = "importance_cost")]
    pub weight_cost: f64,
}

impl RouteRequest {
    /// Creates a request from a query and the three weights.
    pub fn new(
        query: impl Into<String>,
        weight_precision: f64,
        weight_latency: f64,
        weight_cost: f64,
    ) -> Self {
        Self {
            query: query.into(),
            weight_precision,
            weight_latency,
            weight_cost,
        }
    }

    /// Whether the query is non-empty after trimming whitespace.
    ///
    /// The session controller silently refuses to dispatch a request for
    /// which this returns `false`.
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Validates the weight ranges, returning the first violation.
    ///
    /// Range enforcement belongs to the input layer (CLI flags, config
    /// defaults); the controller itself only checks [`has_query`].
    ///
    /// [`has_query`]: RouteRequest::has_query
    pub fn validate(&self) -> Result<(), crate::MixrouteError> {
        for (name, value) in [
            ("importance_precision", self.weight_precision),
            ("importance_latency", self.weight_latency),
            ("importance_cost", self.weight_cost),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(crate::MixrouteError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// The routing service's decision for one submission.
///
/// Produced exclusively by the service and treated as immutable once
/// received. Field values are accepted verbatim; this client performs no
/// range re-validation (trust boundary with the external collaborator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// The generated answer text.
    pub output_text: String,
    /// Identifier of the model the router selected.
    pub chosen_model: String,
    /// Reported latency in milliseconds.
    pub latency_ms: f64,
    /// Reported cost in USD.
    pub cost_usd: f64,
    /// Estimated quality score in `[0, 1]`.
    pub quality_score: f64,
    /// Human-readable rationale for the routing decision.
    pub routing_explanation: String,
    /// ISO-8601 timestamp assigned by the service.
    pub timestamp: String,
}

/// Unique identifier for a client session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The service answered its health probe.
    Healthy,
    /// The service answered but not with a success status.
    Degraded(String),
    /// The service could not be reached.
    Unhealthy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_request_serializes_wire_names() {
        let request = RouteRequest::new("Summarize X", 0.7, 0.5, 0.3);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["user_query"], "Summarize X");
        assert_eq!(json["importance_precision"], 0.7);
        assert_eq!(json["importance_latency"], 0.5);
        assert_eq!(json["importance_cost"], 0.3);
    }

    #[test]
    fn route_result_deserializes_from_wire() {
        let body = serde_json::json!({
            "output_text": "done",
            "chosen_model": "gpt-mini",
            "latency_ms": 120.0,
            "cost_usd": 0.002,
            "quality_score": 0.81,
            "routing_explanation": "fast and cheap",
            "timestamp": "2026-03-01T10:00:00Z"
        });
        let result: RouteResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.chosen_model, "gpt-mini");
        assert_eq!(result.latency_ms, 120.0);
    }

    #[test]
    fn has_query_rejects_whitespace() {
        assert!(!RouteRequest::new("   ", 0.5, 0.5, 0.5).has_query());
        assert!(!RouteRequest::new("", 0.5, 0.5, 0.5).has_query());
        assert!(RouteRequest::new(" x ", 0.5, 0.5, 0.5).has_query());
    }

    #[test]
    fn validate_rejects_out_of_range_weight() {
        let request = RouteRequest::new("q", 1.2, 0.5, 0.3);
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("importance_precision"));

        assert!(RouteRequest::new("q", 1.0, 0.0, 0.5).validate().is_ok());
    }

    #[test]
    fn weights_need_not_sum_to_one() {
        let request = RouteRequest::new("q", 1.0, 1.0, 1.0);
        assert!(request.validate().is_ok());
    }
}
