// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock sentiment adapters for deterministic testing.
//!
//! `MockSentiment` implements `SentimentAdapter` with pre-configured
//! scores, enabling fast tests without a model service. `FailingSentiment`
//! always errors, for exercising the neutral-degradation path.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use solace_core::{SentimentAdapter, SentimentSnapshot, SolaceError};

/// A mock sentiment adapter that returns pre-configured scores.
///
/// Scores are popped from a FIFO queue. When the queue is empty, a neutral
/// 0.0 score is returned.
pub struct MockSentiment {
    scores: Arc<Mutex<VecDeque<f64>>>,
}

impl MockSentiment {
    /// Create a new mock adapter with an empty score queue.
    pub fn new() -> Self {
        Self {
            scores: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Create a mock adapter pre-loaded with the given scores.
    pub fn with_scores(scores: Vec<f64>) -> Self {
        Self {
            scores: Arc::new(Mutex::new(VecDeque::from(scores))),
        }
    }

    /// Add a score to the end of the queue.
    pub async fn add_score(&self, score: f64) {
        self.scores.lock().await.push_back(score);
    }
}

impl Default for MockSentiment {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentAdapter for MockSentiment {
    fn name(&self) -> &str {
        "mock-sentiment"
    }

    async fn score(&self, _text: &str) -> Result<SentimentSnapshot, SolaceError> {
        let score = self.scores.lock().await.pop_front().unwrap_or(0.0);
        Ok(SentimentSnapshot {
            score,
            confidence: 1.0,
        })
    }
}

/// A sentiment adapter that always fails, for degradation-path tests.
pub struct FailingSentiment;

#[async_trait]
impl SentimentAdapter for FailingSentiment {
    fn name(&self) -> &str {
        "failing-sentiment"
    }

    async fn score(&self, _text: &str) -> Result<SentimentSnapshot, SolaceError> {
        Err(SolaceError::Sentiment {
            message: "mock sentiment failure".to_string(),
            source: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scores_pop_in_fifo_order() {
        let mock = MockSentiment::with_scores(vec![-0.5, 0.25]);
        assert_eq!(mock.score("a").await.unwrap().score, -0.5);
        assert_eq!(mock.score("b").await.unwrap().score, 0.25);
        // Exhausted queue degrades to neutral.
        assert_eq!(mock.score("c").await.unwrap().score, 0.0);
    }

    #[tokio::test]
    async fn failing_adapter_errors() {
        let err = FailingSentiment.score("anything").await.unwrap_err();
        assert!(matches!(err, SolaceError::Sentiment { .. }));
    }
}
