// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the mixroute client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level mixroute configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MixrouteConfig {
    /// Routing service endpoint settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Client behavior settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Default weighting preferences for new submissions.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Routing service endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Base URL of the routing service. A trailing slash is stripped before use.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds for calls to the routing service.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    // Local development endpoint of the routing service.
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Client behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Default weighting preferences applied when a submission does not set its
/// own. Each weight is an independent slider in `[0, 1]`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Relative weight given to answer precision.
    #[serde(default = "default_weight_precision")]
    pub weight_precision: f64,

    /// Relative weight given to low latency.
    #[serde(default = "default_weight_latency")]
    pub weight_latency: f64,

    /// Relative weight given to low cost.
    #[serde(default = "default_weight_cost")]
    pub weight_cost: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            weight_precision: default_weight_precision(),
            weight_latency: default_weight_latency(),
            weight_cost: default_weight_cost(),
        }
    }
}

fn default_weight_precision() -> f64 {
    0.7
}

fn default_weight_latency() -> f64 {
    0.5
}

fn default_weight_cost() -> f64 {
    0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MixrouteConfig::default();
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.service.request_timeout_secs, 30);
        assert_eq!(config.client.log_level, "info");
        assert_eq!(config.defaults.weight_precision, 0.7);
        assert_eq!(config.defaults.weight_latency, 0.5);
        assert_eq!(config.defaults.weight_cost, 0.3);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let toml_str = r#"
[service]
base_uri = "http://example.test"
"#;
        let result = toml::from_str::<MixrouteConfig>(toml_str);
        assert!(result.is_err());
    }
}
