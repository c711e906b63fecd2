// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Solace companion platform.

use thiserror::Error;

/// The primary error type used across Solace crates.
///
/// The scoring core itself is total and returns no `Result`; errors arise
/// only at the configuration and adapter seams around it.
#[derive(Debug, Error)]
pub enum SolaceError {
    /// Configuration errors (invalid TOML, out-of-range thresholds, unknown keys).
    #[error("configuration error: {0}")]
    Config(String),

    /// Sentiment adapter errors (model unavailable, scoring failure).
    ///
    /// Callers in the triage path treat this as "sentiment unavailable"
    /// and degrade to a neutral contribution rather than failing the message.
    #[error("sentiment error: {message}")]
    Sentiment {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
