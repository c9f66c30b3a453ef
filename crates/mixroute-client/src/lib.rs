// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport adapter for the mixroute routing service.
//!
//! One HTTP call in, one decision or one transport error out. The session
//! controller consumes this crate through the [`RouteTransport`] trait.
//!
//! [`RouteTransport`]: mixroute_core::RouteTransport

pub mod client;
pub mod health;

pub use client::RouterClient;
