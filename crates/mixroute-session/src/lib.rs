// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session controller and bounded history for the mixroute client.
//!
//! This crate owns the only stateful logic in the workspace: how a
//! submission moves through in-flight, success, and failure, and how
//! decisions accumulate into a bounded, time-ordered history.

pub mod controller;
pub mod history;

pub use controller::{SessionController, SessionPhase, SessionState};
pub use history::{MAX_HISTORY, SessionHistory};
