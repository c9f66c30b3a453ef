// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait implemented by every service adapter.

use async_trait::async_trait;

use crate::error::MixrouteError;
use crate::types::HealthStatus;

/// Identity and liveness surface shared by all adapters.
#[async_trait]
pub trait ServiceAdapter {
    /// Stable adapter name for logs and diagnostics.
    fn name(&self) -> &str;

    /// Adapter version.
    fn version(&self) -> semver::Version;

    /// Probes the adapter's backing service.
    ///
    /// A failed probe is reported through [`HealthStatus`], not as an error;
    /// `Err` is reserved for the probe itself being impossible to run.
    async fn health_check(&self) -> Result<HealthStatus, MixrouteError>;
}
