// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static crisis-indicator pattern tables.
//!
//! Three severity tiers of risk patterns plus one table of protective
//! factors. Each entry pairs a compiled regex with the concept it signals;
//! the severity of a match is implied by which table holds it. Tables are
//! compiled once at process start and never mutated.
//!
//! Patterns match against lowercased text, so they are written lowercase
//! with `\b` word boundaries to avoid substring false positives
//! ("abalone" must not fire the "alone" rule, "number" must not fire "numb").

use std::sync::LazyLock;

use regex::Regex;
use solace_core::{Indicator, ProtectiveFactor};

/// An immutable risk rule: a compiled pattern tagged with its indicator.
pub struct RiskPattern {
    pub regex: Regex,
    pub indicator: Indicator,
}

/// An immutable risk-reducing rule: matching discounts the score.
pub struct ProtectivePattern {
    pub regex: Regex,
    pub factor: ProtectiveFactor,
}

fn risk(pattern: &str, indicator: Indicator) -> RiskPattern {
    RiskPattern {
        regex: Regex::new(pattern).unwrap(),
        indicator,
    }
}

fn protective(pattern: &str, factor: ProtectiveFactor) -> ProtectivePattern {
    ProtectivePattern {
        regex: Regex::new(pattern).unwrap(),
        factor,
    }
}

/// Explicit suicidal ideation, plans, and life negation.
static CRITICAL: LazyLock<Vec<RiskPattern>> = LazyLock::new(|| {
    vec![
        risk(
            r"\b(kill|end|take)\s+(my|myself|my\s+own)\s+life\b",
            Indicator::SuicidalIdeation,
        ),
        risk(r"\bkill(ing)?\s+myself\b", Indicator::SuicidalIdeation),
        risk(r"\b(suicide|suicidal)\b", Indicator::SuicidalMention),
        risk(
            r"\b(don't|dont)\s+want\s+to\s+(live|be\s+alive|exist)",
            Indicator::LifeNegation,
        ),
        risk(
            r"\b(plan|planning)\s+to\s+(die|kill|end)",
            Indicator::SuicidePlan,
        ),
    ]
});

/// Despair, hopelessness, explicit self-harm, resignation, worthlessness.
static HIGH: LazyLock<Vec<RiskPattern>> = LazyLock::new(|| {
    vec![
        risk(
            r"\b(can't|cant|cannot)\s+(go\s+on|keep\s+going|do\s+this)",
            Indicator::Despair,
        ),
        risk(r"\b(hopeless|no\s+hope|pointless)\b", Indicator::Hopelessness),
        risk(r"\b(hurt|harm)\s+(myself|me)\b", Indicator::SelfHarm),
        risk(r"\b(give\s+up|giving\s+up)\b", Indicator::Resignation),
        risk(
            r"\b(better\s+off\s+dead|world.*better.*without\s+me)\b",
            Indicator::Worthlessness,
        ),
    ]
});

/// Negative self-worth, exhaustion, isolation, numbness.
static MEDIUM: LazyLock<Vec<RiskPattern>> = LazyLock::new(|| {
    vec![
        risk(
            r"\b(worthless|useless|burden)\b",
            Indicator::NegativeSelfWorth,
        ),
        risk(
            r"\b(exhausted|tired\s+of\s+everything|drained)\b",
            Indicator::EmotionalExhaustion,
        ),
        risk(r"\b(isolated|alone|lonely)\b", Indicator::Isolation),
        risk(r"\b(numb|empty|void)\b", Indicator::EmotionalNumbness),
    ]
});

/// Risk-reducing signals, one pattern per protective category.
static PROTECTIVE: LazyLock<Vec<ProtectivePattern>> = LazyLock::new(|| {
    vec![
        protective(
            r"\b(help|support|therapy|therapist|counselor)\b",
            ProtectiveFactor::SeekingHelp,
        ),
        protective(
            r"\b(friend|family|loved\s+ones)\b",
            ProtectiveFactor::SocialConnection,
        ),
        protective(
            r"\b(tomorrow|future|next\s+week|plans)\b",
            ProtectiveFactor::FutureOrientation,
        ),
        protective(
            r"\b(better|improving|getting\s+through)\b",
            ProtectiveFactor::PositiveOutlook,
        ),
    ]
});

/// The critical-tier pattern table.
pub fn critical_patterns() -> &'static [RiskPattern] {
    &CRITICAL
}

/// The high-tier pattern table.
pub fn high_patterns() -> &'static [RiskPattern] {
    &HIGH
}

/// The medium-tier pattern table.
pub fn medium_patterns() -> &'static [RiskPattern] {
    &MEDIUM
}

/// The protective-factor pattern table.
pub fn protective_patterns() -> &'static [ProtectivePattern] {
    &PROTECTIVE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pattern_tables_compile() {
        // Forcing the LazyLocks compiles every regex; a malformed pattern
        // would panic here rather than at first use in production.
        assert_eq!(critical_patterns().len(), 5);
        assert_eq!(high_patterns().len(), 5);
        assert_eq!(medium_patterns().len(), 4);
        assert_eq!(protective_patterns().len(), 4);
    }

    #[test]
    fn word_boundaries_prevent_substring_matches() {
        // "alone" must not fire inside "abalone", "numb" not inside "number".
        let isolation = &medium_patterns()[2];
        assert!(isolation.regex.is_match("i feel so alone"));
        assert!(!isolation.regex.is_match("the abalone was delicious"));

        let numbness = &medium_patterns()[3];
        assert!(numbness.regex.is_match("i just feel numb"));
        assert!(!numbness.regex.is_match("call this number"));
    }

    #[test]
    fn critical_patterns_catch_phrasing_variants() {
        let ideation = &critical_patterns()[0];
        assert!(ideation.regex.is_match("i want to end my life"));
        assert!(ideation.regex.is_match("kill my own life"));
        assert_eq!(ideation.indicator, Indicator::SuicidalIdeation);

        let negation = &critical_patterns()[2];
        assert!(negation.regex.is_match("i don't want to live"));
        assert!(negation.regex.is_match("dont want to be alive"));
        assert!(negation.regex.is_match("i don't want to exist anymore"));
    }

    #[test]
    fn protective_patterns_cover_each_category() {
        let factors: Vec<ProtectiveFactor> =
            protective_patterns().iter().map(|p| p.factor).collect();
        assert_eq!(
            factors,
            vec![
                ProtectiveFactor::SeekingHelp,
                ProtectiveFactor::SocialConnection,
                ProtectiveFactor::FutureOrientation,
                ProtectiveFactor::PositiveOutlook,
            ]
        );
    }
}
