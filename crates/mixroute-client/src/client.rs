// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the routing service.
//!
//! Provides [`RouterClient`] which serializes one [`RouteRequest`], performs
//! one network call, and deserializes the decision or surfaces a transport
//! error. No retries and no state live here; the session controller owns the
//! submission lifecycle.

use std::time::Duration;

use mixroute_config::model::ServiceConfig;
use mixroute_core::{MixrouteError, RouteRequest, RouteResult, RouteTransport};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

/// HTTP client for routing service communication.
#[derive(Debug, Clone)]
pub struct RouterClient {
    client: reqwest::Client,
    base_url: String,
}

impl RouterClient {
    /// Creates a new routing service client from config.
    ///
    /// The configured base URL has any trailing slash stripped before use.
    pub fn new(config: &ServiceConfig) -> Result<Self, MixrouteError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| MixrouteError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL in effect (trailing slash already stripped).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Inner HTTP client, shared with the health probe.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Submits one routing request: exactly one outbound `POST /route`.
    ///
    /// Non-success statuses surface the response body text verbatim as the
    /// error message, falling back to a generic message when the body is
    /// empty. A 2xx body that does not decode into [`RouteResult`] is also a
    /// transport error; decoded field values are accepted as-is.
    pub async fn route(&self, request: &RouteRequest) -> Result<RouteResult, MixrouteError> {
        let url = format!("{}/route", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| MixrouteError::Transport {
                message: format!("request to routing service failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "routing response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!("routing service returned {status}")
            } else {
                body
            };
            return Err(MixrouteError::Transport {
                message,
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| MixrouteError::Transport {
            message: format!("failed to read routing response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        let result: RouteResult =
            serde_json::from_str(&body).map_err(|e| MixrouteError::Transport {
                message: format!("failed to parse routing response: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(result)
    }
}

#[async_trait::async_trait]
impl RouteTransport for RouterClient {
    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, MixrouteError> {
        RouterClient::route(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> RouterClient {
        RouterClient::new(&ServiceConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    fn test_request() -> RouteRequest {
        RouteRequest::new("Summarize X", 0.7, 0.5, 0.3)
    }

    fn decision_body() -> serde_json::Value {
        serde_json::json!({
            "output_text": "Here is the summary.",
            "chosen_model": "gpt-mini",
            "latency_ms": 120.0,
            "cost_usd": 0.002,
            "quality_score": 0.81,
            "routing_explanation": "short query, cost weighted",
            "timestamp": "2026-03-01T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn route_success_parses_decision() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/route"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(decision_body()))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.route(&test_request()).await.unwrap();

        assert_eq!(result.chosen_model, "gpt-mini");
        assert_eq!(result.latency_ms, 120.0);
        assert_eq!(result.cost_usd, 0.002);
        assert_eq!(result.quality_score, 0.81);
    }

    #[tokio::test]
    async fn route_sends_wire_contract_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/route"))
            .and(body_json(serde_json::json!({
                "user_query": "Summarize X",
                "importance_precision": 0.7,
                "importance_latency": 0.5,
                "importance_cost": 0.3
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(decision_body()))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.route(&test_request()).await;
        assert!(result.is_ok(), "body should match wire contract: {result:?}");
    }

    #[tokio::test]
    async fn route_non_success_uses_body_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/route"))
            .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.route(&test_request()).await.unwrap_err();
        assert_eq!(err.surface_message(), "overloaded");
    }

    #[tokio::test]
    async fn route_non_success_empty_body_falls_back() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/route"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.route(&test_request()).await.unwrap_err();
        assert!(
            err.surface_message().contains("404"),
            "fallback should name the status, got: {}",
            err.surface_message()
        );
    }

    #[tokio::test]
    async fn route_undecodable_success_body_is_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/route"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.route(&test_request()).await.unwrap_err();
        assert!(
            err.surface_message().contains("parse"),
            "got: {}",
            err.surface_message()
        );
    }

    #[tokio::test]
    async fn route_makes_exactly_one_call() {
        let server = MockServer::start().await;

        // A failing status must not be retried.
        Mock::given(method("POST"))
            .and(path("/route"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let _ = client.route(&test_request()).await;
        // expectation checked on MockServer drop
    }

    #[tokio::test]
    async fn route_connectivity_failure_surfaces_transport_error() {
        // Port 1 is never listening.
        let client = test_client("http://127.0.0.1:1");
        let err = client.route(&test_request()).await.unwrap_err();
        assert!(matches!(err, MixrouteError::Transport { .. }));
    }

    #[tokio::test]
    async fn trailing_slash_is_stripped() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/route"))
            .respond_with(ResponseTemplate::new(200).set_body_json(decision_body()))
            .mount(&server)
            .await;

        let client = test_client(&format!("{}/", server.uri()));
        assert!(!client.base_url().ends_with('/'));
        let result = client.route(&test_request()).await;
        assert!(result.is_ok(), "stripped URL should still resolve /route");
    }
}
