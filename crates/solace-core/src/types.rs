// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the Solace risk-triage core.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub String);

/// Unique identifier for a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

/// Ordinal risk classification derived from a numeric score.
///
/// The ordering `Low < Medium < High < Critical` is load-bearing:
/// escalation is defined as `High` or above.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Whether this level requires a human moderator to be notified.
    ///
    /// Escalation is exactly `High` or `Critical`; it is never computed
    /// independently of the level.
    pub fn requires_escalation(self) -> bool {
        self >= RiskLevel::High
    }
}

/// A named textual-pattern concept signalling elevated risk.
///
/// The severity tier of an indicator is implied by which pattern table it
/// belongs to, not by the indicator itself.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    // Critical tier
    SuicidalIdeation,
    SuicidalMention,
    LifeNegation,
    SuicidePlan,
    // High tier
    Despair,
    Hopelessness,
    SelfHarm,
    Resignation,
    Worthlessness,
    // Medium tier
    NegativeSelfWorth,
    EmotionalExhaustion,
    Isolation,
    EmotionalNumbness,
}

/// A textual-pattern concept signalling reduced risk.
///
/// Each matched category discounts the message score by a fixed amount.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProtectiveFactor {
    SeekingHelp,
    SocialConnection,
    FutureOrientation,
    PositiveOutlook,
}

/// Result of analyzing a single message for crisis indicators.
///
/// Created fresh per message and owned by the caller, who decides whether
/// and how to persist it alongside the message record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRiskResult {
    /// Combined risk score, clamped to [0.0, 1.0] and rounded to 2 decimals.
    pub risk_score: f64,
    /// Classification of the score.
    pub risk_level: RiskLevel,
    /// Deduplicated set of indicators matched across all risk tiers.
    /// Protective-factor matches are not included.
    pub indicators: BTreeSet<Indicator>,
    /// Exactly `risk_level.requires_escalation()`.
    pub requires_escalation: bool,
}

/// Decision from the user-level risk aggregator.
///
/// `should_update` is `false` only when the computed level is `Low`: the
/// aggregator ratchets a user's standing level upward but never asks the
/// caller to downgrade it. The caller persists `new_level`, stamps the
/// assessment time, and sets escalation status for high/critical levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskDecision {
    pub should_update: bool,
    pub new_level: RiskLevel,
}

/// Sentiment of a message as reported by an external sentiment adapter.
///
/// `score` is in [-1.0, 1.0] with negative meaning distressed. Absence of
/// a snapshot (adapter missing or failed) is treated as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    pub score: f64,
    /// Model confidence in [0.0, 1.0].
    pub confidence: f64,
}
