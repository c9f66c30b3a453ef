// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport seam between the session controller and the routing service.

use async_trait::async_trait;

use crate::error::MixrouteError;
use crate::types::{RouteRequest, RouteResult};

/// One-shot transport to the routing service.
///
/// Implementations perform exactly one outbound call per invocation: no
/// retries, no queueing, no state. The session controller owns all lifecycle
/// state and depends on this trait rather than on a concrete HTTP client.
#[async_trait]
pub trait RouteTransport: Send + Sync {
    /// Submits one routing request and returns the service's decision.
    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, MixrouteError>;
}
