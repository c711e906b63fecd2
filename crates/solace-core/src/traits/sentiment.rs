// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sentiment adapter trait for externally computed message sentiment.

use async_trait::async_trait;

use crate::error::SolaceError;
use crate::types::SentimentSnapshot;

/// Adapter for an external sentiment-analysis collaborator.
///
/// The production implementation wraps a model service owned by the
/// surrounding platform; the risk core never loads a model itself. The
/// triage pipeline treats any `Err` as "sentiment unavailable" and scores
/// the message with a neutral contribution instead of failing it.
#[async_trait]
pub trait SentimentAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Scores the sentiment of `text`, negative meaning distressed.
    async fn score(&self, text: &str) -> Result<SentimentSnapshot, SolaceError>;
}
