// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Solace integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests
//! without external services.
//!
//! # Components
//!
//! - [`MockSentiment`] - Mock sentiment adapter with pre-configured scores
//! - [`FailingSentiment`] - Sentiment adapter that always errors

pub mod mock_sentiment;

pub use mock_sentiment::{FailingSentiment, MockSentiment};
