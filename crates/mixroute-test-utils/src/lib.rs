// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for mixroute integration tests.
//!
//! Provides a scripted mock transport for fast, deterministic,
//! CI-runnable tests without a live routing service.

pub mod mock_transport;

pub use mock_transport::{MockTransport, sample_result, sample_result_at};
