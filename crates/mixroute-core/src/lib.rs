// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the mixroute client.
//!
//! Provides the foundational error type, the wire types of the routing
//! service contract, and the adapter traits the transport layer implements.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::MixrouteError;
pub use types::{HealthStatus, RouteRequest, RouteResult, SessionId};

pub use traits::{RouteTransport, ServiceAdapter};
