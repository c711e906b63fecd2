// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message triage pipeline.
//!
//! Wires the sentiment seam, the per-message analyzer, and the user-level
//! aggregator into one call the conversation pipeline invokes per inbound
//! message. The pipeline holds no user state; the rolling score history is
//! supplied by the caller, who also persists the outcome and serializes
//! concurrent updates for the same user.

use std::sync::Arc;

use solace_config::model::RiskConfig;
use solace_core::{MessageRiskResult, RiskDecision, SentimentAdapter};
use tracing::{debug, warn};

use crate::aggregator::RiskAggregator;
use crate::analyzer::RiskAnalyzer;

/// Combined result of triaging one message.
#[derive(Debug, Clone)]
pub struct TriageOutcome {
    /// Per-message analysis, persisted on the message record.
    pub message: MessageRiskResult,
    /// User-level decision, applied to the user record when `should_update`.
    pub decision: RiskDecision,
}

/// Per-message triage: sentiment, analysis, aggregation, escalation logging.
pub struct TriagePipeline {
    analyzer: RiskAnalyzer,
    aggregator: RiskAggregator,
    sentiment: Option<Arc<dyn SentimentAdapter>>,
}

impl TriagePipeline {
    /// Create a pipeline without a sentiment adapter; sentiment then
    /// contributes nothing to any score.
    pub fn new(config: &RiskConfig) -> Self {
        Self {
            analyzer: RiskAnalyzer::new(&config.message),
            aggregator: RiskAggregator::new(&config.user),
            sentiment: None,
        }
    }

    /// Attach an external sentiment adapter.
    pub fn with_sentiment(mut self, adapter: Arc<dyn SentimentAdapter>) -> Self {
        self.sentiment = Some(adapter);
        self
    }

    /// Triage one inbound message against the user's rolling history.
    ///
    /// A failing or absent sentiment adapter degrades to a neutral
    /// contribution; triage itself never fails.
    pub async fn triage(&self, text: &str, history: &[f64]) -> TriageOutcome {
        let sentiment_score = match &self.sentiment {
            Some(adapter) => match adapter.score(text).await {
                Ok(snapshot) => Some(snapshot.score),
                Err(err) => {
                    debug!(
                        adapter = adapter.name(),
                        error = %err,
                        "sentiment unavailable, scoring without it"
                    );
                    None
                }
            },
            None => None,
        };

        let message = self.analyzer.analyze(text, sentiment_score);
        let decision = self.aggregator.evaluate(history, message.risk_score);

        if message.requires_escalation {
            warn!(
                risk_score = message.risk_score,
                risk_level = %message.risk_level,
                indicators = ?message.indicators,
                new_level = %decision.new_level,
                "message flagged for moderator escalation"
            );
        } else {
            debug!(
                risk_score = message.risk_score,
                risk_level = %message.risk_level,
                "message triaged"
            );
        }

        TriageOutcome { message, decision }
    }
}

#[cfg(test)]
mod tests {
    use solace_test_utils::{FailingSentiment, MockSentiment};
    use tracing_test::traced_test;

    use solace_core::RiskLevel;

    use super::*;

    fn pipeline() -> TriagePipeline {
        TriagePipeline::new(&RiskConfig::default())
    }

    #[tokio::test]
    async fn triage_without_sentiment_adapter() {
        let outcome = pipeline().triage("I feel hopeless", &[0.1, 0.1, 0.1]).await;
        assert_eq!(outcome.message.risk_score, 0.7);
        assert_eq!(outcome.message.risk_level, RiskLevel::High);
        // Newest score 0.7 >= current_high; the calm history keeps the
        // average below the critical cutoff.
        assert!(outcome.decision.should_update);
        assert_eq!(outcome.decision.new_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn sentiment_adapter_feeds_the_analyzer() {
        let sentiment = Arc::new(MockSentiment::with_scores(vec![-1.0]));
        let outcome = pipeline()
            .with_sentiment(sentiment)
            .triage("I feel hopeless", &[])
            .await;
        // 0.7 floor + 1.0 * 0.3 saturates at 1.0.
        assert_eq!(outcome.message.risk_score, 1.0);
        assert_eq!(outcome.message.risk_level, RiskLevel::Critical);
    }

    #[tokio::test]
    async fn failing_sentiment_degrades_to_neutral() {
        let outcome = pipeline()
            .with_sentiment(Arc::new(FailingSentiment))
            .triage("I feel hopeless", &[])
            .await;
        assert_eq!(outcome.message.risk_score, 0.7);
    }

    #[tokio::test]
    async fn calm_message_with_calm_history_does_not_update() {
        let outcome = pipeline()
            .triage("lovely walk in the park today", &[0.0, 0.1, 0.0])
            .await;
        assert_eq!(outcome.message.risk_level, RiskLevel::Low);
        assert!(!outcome.decision.should_update);
        assert_eq!(outcome.decision.new_level, RiskLevel::Low);
    }

    #[tokio::test]
    #[traced_test]
    async fn escalation_emits_a_warning_log() {
        let outcome = pipeline().triage("I am planning to end my life", &[]).await;
        assert!(outcome.message.requires_escalation);
        assert!(logs_contain("message flagged for moderator escalation"));
    }

    #[tokio::test]
    #[traced_test]
    async fn routine_triage_does_not_warn() {
        let outcome = pipeline().triage("long day, pretty tired", &[]).await;
        assert!(!outcome.message.requires_escalation);
        assert!(!logs_contain("message flagged for moderator escalation"));
    }
}
