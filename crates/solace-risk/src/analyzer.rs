// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-message crisis scoring.
//!
//! Scores free-form user text against three tiers of risk patterns, blends
//! in externally computed sentiment, discounts protective-factor language,
//! and classifies the result into a risk level. Deterministic, stateless,
//! and total: no I/O, no clock, cannot fail.

use std::collections::BTreeSet;

use solace_config::model::MessageRiskConfig;
use solace_core::{MessageRiskResult, RiskLevel};

use crate::patterns::{critical_patterns, high_patterns, medium_patterns, protective_patterns};

/// Analyzes a single message for crisis indicators.
///
/// Thresholds and weights come from [`MessageRiskConfig`]; the compiled
/// defaults are deliberately conservative.
#[derive(Debug, Clone)]
pub struct RiskAnalyzer {
    config: MessageRiskConfig,
}

impl RiskAnalyzer {
    /// Create an analyzer with the given thresholds.
    pub fn new(config: &MessageRiskConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Score `text` for crisis indicators.
    ///
    /// `sentiment_score` is an externally computed scalar in [-1.0, 1.0]
    /// (negative = distressed); `None` means sentiment is unavailable and
    /// contributes nothing. Matching runs over a lowercased working copy;
    /// the original text is never mutated.
    pub fn analyze(&self, text: &str, sentiment_score: Option<f64>) -> MessageRiskResult {
        let lowered = text.to_lowercase();
        let mut indicators = BTreeSet::new();
        let mut score: f64 = 0.0;

        // Each tier raises the running score to a constant floor via max;
        // multiple matches within a tier never accumulate.
        let tiers = [
            (critical_patterns(), self.config.critical_floor),
            (high_patterns(), self.config.high_floor),
            (medium_patterns(), self.config.medium_floor),
        ];
        for (patterns, floor) in tiers {
            for pattern in patterns {
                if pattern.regex.is_match(&lowered) {
                    indicators.insert(pattern.indicator);
                    score = score.max(floor);
                }
            }
        }

        // Negative sentiment amplifies pattern evidence; it never reduces
        // the score, and saturates here so protective subtraction below
        // stays strict even from a saturated score.
        if let Some(s) = sentiment_score
            && s < 0.0
        {
            score = (score + s.abs() * self.config.sentiment_weight).min(1.0);
        }

        // Each distinct protective category matched discounts the score;
        // protective factors can erase risk but never invert it.
        let protective_count = protective_patterns()
            .iter()
            .filter(|p| p.regex.is_match(&lowered))
            .count();
        if protective_count > 0 {
            score = (score - protective_count as f64 * self.config.protective_discount).max(0.0);
        }

        let risk_score = round2(score);
        let risk_level = self.classify(risk_score);

        MessageRiskResult {
            risk_score,
            risk_level,
            indicators,
            requires_escalation: risk_level.requires_escalation(),
        }
    }

    fn classify(&self, score: f64) -> RiskLevel {
        if score >= self.config.critical_cutoff {
            RiskLevel::Critical
        } else if score >= self.config.high_cutoff {
            RiskLevel::High
        } else if score >= self.config.medium_cutoff {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self::new(&MessageRiskConfig::default())
    }
}

fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use solace_core::Indicator;

    use super::*;

    #[test]
    fn empty_string_scores_zero() {
        let result = RiskAnalyzer::default().analyze("", None);
        assert_eq!(result.risk_score, 0.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.indicators.is_empty());
        assert!(!result.requires_escalation);
    }

    #[test]
    fn critical_pattern_sets_floor_and_escalates() {
        let result = RiskAnalyzer::default().analyze("I want to kill myself", None);
        assert!(result.risk_score >= 0.9);
        assert_eq!(result.risk_level, RiskLevel::Critical);
        assert!(result.requires_escalation);
        assert!(result.indicators.contains(&Indicator::SuicidalIdeation));
    }

    #[test]
    fn suicidal_mention_alone_is_critical() {
        let result = RiskAnalyzer::default().analyze("I keep having suicidal thoughts", None);
        assert_eq!(result.risk_score, 0.9);
        assert_eq!(result.risk_level, RiskLevel::Critical);
        assert_eq!(
            result.indicators,
            std::collections::BTreeSet::from([Indicator::SuicidalMention])
        );
    }

    #[test]
    fn high_tier_floor_is_constant_across_multiple_matches() {
        // Two high-tier matches must not accumulate past the floor.
        let result = RiskAnalyzer::default().analyze("It's hopeless, I give up", None);
        assert_eq!(result.risk_score, 0.7);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.indicators.contains(&Indicator::Hopelessness));
        assert!(result.indicators.contains(&Indicator::Resignation));
    }

    #[test]
    fn medium_tier_classifies_without_escalation() {
        let result = RiskAnalyzer::default().analyze("I feel so alone and drained", None);
        assert_eq!(result.risk_score, 0.4);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(!result.requires_escalation);
    }

    #[test]
    fn negative_sentiment_amplifies_pattern_evidence() {
        let analyzer = RiskAnalyzer::default();
        let without = analyzer.analyze("I feel worthless", None);
        let with = analyzer.analyze("I feel worthless", Some(-0.5));
        assert_eq!(without.risk_score, 0.4);
        assert_eq!(with.risk_score, 0.55); // 0.4 + 0.5 * 0.3
        assert!(with.risk_score > without.risk_score);
    }

    #[test]
    fn positive_or_missing_sentiment_contributes_nothing() {
        let analyzer = RiskAnalyzer::default();
        let neutral = analyzer.analyze("I feel worthless", None);
        let positive = analyzer.analyze("I feel worthless", Some(0.8));
        assert_eq!(neutral.risk_score, positive.risk_score);
    }

    #[test]
    fn sentiment_alone_cannot_reach_high() {
        // Without a pattern match the sentiment contribution caps at 0.3.
        let result = RiskAnalyzer::default().analyze("the weather is fine", Some(-1.0));
        assert_eq!(result.risk_score, 0.3);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(!result.requires_escalation);
    }

    #[test]
    fn protective_factors_discount_per_distinct_category() {
        let analyzer = RiskAnalyzer::default();
        let bare = analyzer.analyze("It's hopeless, I can't go on", None);
        // "therapist" (seeking_help) + "friend" (social_connection): two
        // categories, 0.2 off.
        let softened = analyzer.analyze(
            "It's hopeless, I can't go on, but I have a therapist and a friend",
            None,
        );
        assert_eq!(bare.risk_score, 0.7);
        assert_eq!(softened.risk_score, 0.5);
    }

    #[test]
    fn protective_discount_is_strict_even_from_saturation() {
        let analyzer = RiskAnalyzer::default();
        // 0.9 floor + 1.0 * 0.3 saturates at 1.0 before the discount.
        let saturated = analyzer.analyze("I am suicidal", Some(-1.0));
        let softened = analyzer.analyze("I am suicidal but my therapist helps", Some(-1.0));
        assert_eq!(saturated.risk_score, 1.0);
        assert_eq!(softened.risk_score, 0.9);
        assert!(softened.risk_score < saturated.risk_score);
    }

    #[test]
    fn protective_factors_floor_at_zero() {
        // Four protective categories on a pattern-free message: 0 - 0.4 -> 0.
        let result = RiskAnalyzer::default().analyze(
            "My therapist, my family, and my plans for tomorrow keep things improving",
            None,
        );
        assert_eq!(result.risk_score, 0.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn indicators_deduplicate_within_a_result() {
        // "suicide" and "suicidal" both fire the same mention pattern once,
        // and repeated phrases cannot duplicate set entries.
        let result = RiskAnalyzer::default().analyze("suicide, suicidal, suicide again", None);
        assert_eq!(result.indicators.len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive_and_leaves_input_alone() {
        let analyzer = RiskAnalyzer::default();
        let upper = analyzer.analyze("I FEEL HOPELESS", None);
        let lower = analyzer.analyze("i feel hopeless", None);
        assert_eq!(upper, lower);
    }

    #[test]
    fn custom_cutoffs_change_classification() {
        let config = MessageRiskConfig {
            high_cutoff: 0.35,
            ..MessageRiskConfig::default()
        };
        let result = RiskAnalyzer::new(&config).analyze("I feel so alone", None);
        assert_eq!(result.risk_score, 0.4);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.requires_escalation);
    }

    #[test]
    fn analysis_is_idempotent() {
        let analyzer = RiskAnalyzer::default();
        let text = "I can't go on, everything is pointless, but therapy helps";
        let a = analyzer.analyze(text, Some(-0.42));
        let b = analyzer.analyze(text, Some(-0.42));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn score_is_always_clamped(text in "\\PC{0,200}", sentiment in proptest::option::of(-1.0f64..=1.0)) {
            let result = RiskAnalyzer::default().analyze(&text, sentiment);
            prop_assert!((0.0..=1.0).contains(&result.risk_score));
        }

        #[test]
        fn escalation_always_tracks_level(text in "\\PC{0,200}", sentiment in proptest::option::of(-1.0f64..=1.0)) {
            let result = RiskAnalyzer::default().analyze(&text, sentiment);
            prop_assert_eq!(
                result.requires_escalation,
                result.risk_level.requires_escalation()
            );
        }
    }
}
