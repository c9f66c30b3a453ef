// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as URL schemes, weight ranges, and known log levels.

use crate::diagnostic::ConfigError;
use crate::model::MixrouteConfig;

const KNOWN_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &MixrouteConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate base_url is not empty
    let base_url = config.service.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "service.base_url must not be empty".to_string(),
        });
    }

    // Validate base_url carries an http(s) scheme
    if !base_url.is_empty()
        && !base_url.starts_with("http://")
        && !base_url.starts_with("https://")
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "service.base_url `{base_url}` must start with http:// or https://"
            ),
        });
    }

    // Validate request timeout is non-zero
    if config.service.request_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "service.request_timeout_secs must be at least 1".to_string(),
        });
    }

    // Validate log level is a known tracing level
    let level = config.client.log_level.to_lowercase();
    if !KNOWN_LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "client.log_level `{}` is not one of: {}",
                config.client.log_level,
                KNOWN_LOG_LEVELS.join(", ")
            ),
        });
    }

    // Validate default weights are within [0, 1]
    for (name, value) in [
        ("defaults.weight_precision", config.defaults.weight_precision),
        ("defaults.weight_latency", config.defaults.weight_latency),
        ("defaults.weight_cost", config.defaults.weight_cost),
    ] {
        if !(0.0..=1.0).contains(&value) || value.is_nan() {
            errors.push(ConfigError::Validation {
                message: format!("{name} must be within [0, 1], got {value}"),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
