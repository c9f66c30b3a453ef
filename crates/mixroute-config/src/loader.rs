// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./mixroute.toml` > `~/.config/mixroute/mixroute.toml`
//! > `/etc/mixroute/mixroute.toml` with environment variable overrides via
//! `MIXROUTE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MixrouteConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/mixroute/mixroute.toml` (system-wide)
/// 3. `~/.config/mixroute/mixroute.toml` (user XDG config)
/// 4. `./mixroute.toml` (local directory)
/// 5. `MIXROUTE_*` environment variables
pub fn load_config() -> Result<MixrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MixrouteConfig::default()))
        .merge(Toml::file("/etc/mixroute/mixroute.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("mixroute/mixroute.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("mixroute.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<MixrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MixrouteConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MixrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MixrouteConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `MIXROUTE_SERVICE_BASE_URL` must map to
/// `service.base_url`, not `service.base.url`.
fn env_provider() -> Env {
    Env::prefixed("MIXROUTE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: MIXROUTE_SERVICE_BASE_URL -> "service_base_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("client_", "client.", 1)
            .replacen("defaults_", "defaults.", 1);
        mapped.into()
    })
}
