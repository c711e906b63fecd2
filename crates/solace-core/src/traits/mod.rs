// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for external collaborators of the risk core.
//!
//! Adapters use `#[async_trait]` for dynamic dispatch compatibility.

pub mod sentiment;

pub use sentiment::SentimentAdapter;
