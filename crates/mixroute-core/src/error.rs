// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the mixroute client.

use thiserror::Error;

/// The primary error type used across the mixroute workspace.
#[derive(Debug, Error)]
pub enum MixrouteError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport errors from the routing service (connectivity failure,
    /// non-success HTTP status, undecodable response body).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl MixrouteError {
    /// The human-readable message to surface to an observer of session state.
    ///
    /// Transport failures carry the service's own words (response body text
    /// when present); other variants fall back to their display form.
    pub fn surface_message(&self) -> String {
        match self {
            MixrouteError::Transport { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_surface_message_is_verbatim() {
        let err = MixrouteError::Transport {
            message: "overloaded".into(),
            source: None,
        };
        assert_eq!(err.surface_message(), "overloaded");
        assert_eq!(err.to_string(), "transport error: overloaded");
    }

    #[test]
    fn config_surface_message_uses_display() {
        let err = MixrouteError::Config("bad base_url".into());
        assert_eq!(err.surface_message(), "configuration error: bad base_url");
    }
}
