// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health probe against the routing service's `/healthz` endpoint.

use async_trait::async_trait;
use mixroute_core::{HealthStatus, MixrouteError, ServiceAdapter};
use tracing::debug;

use crate::client::RouterClient;

impl RouterClient {
    /// Probes `GET /healthz` on the routing service.
    ///
    /// Connectivity failure maps to `Unhealthy`, a non-success status to
    /// `Degraded`; only building the probe itself can error.
    pub async fn probe_health(&self) -> Result<HealthStatus, MixrouteError> {
        let url = format!("{}/healthz", self.base_url());

        match self.http().get(&url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!(status = %status, "health probe answered");
                if status.is_success() {
                    Ok(HealthStatus::Healthy)
                } else {
                    Ok(HealthStatus::Degraded(format!(
                        "health endpoint returned {status}"
                    )))
                }
            }
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "routing service unreachable: {e}"
            ))),
        }
    }
}

#[async_trait]
impl ServiceAdapter for RouterClient {
    fn name(&self) -> &str {
        "router-client"
    }

    fn version(&self) -> semver::Version {
        semver::Version::parse(env!("CARGO_PKG_VERSION"))
            .unwrap_or_else(|_| semver::Version::new(0, 0, 0))
    }

    async fn health_check(&self) -> Result<HealthStatus, MixrouteError> {
        self.probe_health().await
    }
}

#[cfg(test)]
mod tests {
    use mixroute_config::model::ServiceConfig;
    use mixroute_core::{HealthStatus, ServiceAdapter};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::RouterClient;

    fn test_client(base_url: &str) -> RouterClient {
        RouterClient::new(&ServiceConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn healthy_service_reports_healthy() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/healthz"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let status = client.health_check().await.unwrap();
        assert_eq!(status, HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn failing_probe_reports_degraded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/healthz"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let status = client.health_check().await.unwrap();
        assert!(matches!(status, HealthStatus::Degraded(_)));
    }

    #[tokio::test]
    async fn unreachable_service_reports_unhealthy() {
        let client = test_client("http://127.0.0.1:1");
        let status = client.health_check().await.unwrap();
        assert!(matches!(status, HealthStatus::Unhealthy(_)));
    }
}
