// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Solace risk-triage core.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.
//!
//! The risk thresholds are deliberately configuration, not code: none of
//! the cutoffs are clinically validated, and deployments must be able to
//! tune them without touching the scoring logic. The compiled defaults are
//! the conservative scheme.

use serde::{Deserialize, Serialize};

/// Top-level Solace configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SolaceConfig {
    /// Agent identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Risk scoring thresholds and weights.
    #[serde(default)]
    pub risk: RiskConfig,

    /// Crisis-resources directory settings.
    #[serde(default)]
    pub resources: ResourcesConfig,
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "solace".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Risk scoring configuration, split between the per-message analyzer and
/// the user-level aggregator.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RiskConfig {
    /// Per-message analyzer thresholds.
    #[serde(default)]
    pub message: MessageRiskConfig,

    /// User-level aggregator thresholds.
    #[serde(default)]
    pub user: UserRiskConfig,
}

/// Thresholds and weights for the per-message risk analyzer.
///
/// Floors are the score a tier match raises the running score to (via max,
/// never additive). Cutoffs classify the final score into a level.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MessageRiskConfig {
    /// Score floor set by any critical-tier pattern match.
    #[serde(default = "default_critical_floor")]
    pub critical_floor: f64,

    /// Score floor set by any high-tier pattern match.
    #[serde(default = "default_high_floor")]
    pub high_floor: f64,

    /// Score floor set by any medium-tier pattern match.
    #[serde(default = "default_medium_floor")]
    pub medium_floor: f64,

    /// Multiplier applied to the absolute value of a negative sentiment score.
    #[serde(default = "default_sentiment_weight")]
    pub sentiment_weight: f64,

    /// Score subtracted per distinct protective-factor category matched.
    #[serde(default = "default_protective_discount")]
    pub protective_discount: f64,

    /// Final score at or above which a message classifies as critical.
    #[serde(default = "default_critical_cutoff")]
    pub critical_cutoff: f64,

    /// Final score at or above which a message classifies as high.
    #[serde(default = "default_high_cutoff")]
    pub high_cutoff: f64,

    /// Final score at or above which a message classifies as medium.
    #[serde(default = "default_medium_cutoff")]
    pub medium_cutoff: f64,
}

impl Default for MessageRiskConfig {
    fn default() -> Self {
        Self {
            critical_floor: default_critical_floor(),
            high_floor: default_high_floor(),
            medium_floor: default_medium_floor(),
            sentiment_weight: default_sentiment_weight(),
            protective_discount: default_protective_discount(),
            critical_cutoff: default_critical_cutoff(),
            high_cutoff: default_high_cutoff(),
            medium_cutoff: default_medium_cutoff(),
        }
    }
}

fn default_critical_floor() -> f64 {
    0.9
}

fn default_high_floor() -> f64 {
    0.7
}

fn default_medium_floor() -> f64 {
    0.4
}

fn default_sentiment_weight() -> f64 {
    0.3
}

fn default_protective_discount() -> f64 {
    0.1
}

fn default_critical_cutoff() -> f64 {
    0.8
}

fn default_high_cutoff() -> f64 {
    0.6
}

fn default_medium_cutoff() -> f64 {
    0.3
}

/// Thresholds for the user-level risk aggregator.
///
/// `current_*` cutoffs apply to the newest message score, `average_*`
/// cutoffs to the mean of the rolling window plus the newest score.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UserRiskConfig {
    /// Number of trailing history entries consulted (plus the new score).
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Newest-score cutoff for a critical decision.
    #[serde(default = "default_current_critical")]
    pub current_critical: f64,

    /// Window-average cutoff for a critical decision.
    #[serde(default = "default_average_critical")]
    pub average_critical: f64,

    /// Newest-score cutoff for a high decision. This is the "threshold for
    /// concern" of the external contract.
    #[serde(default = "default_current_high")]
    pub current_high: f64,

    /// Window-average cutoff for a high decision.
    #[serde(default = "default_average_high")]
    pub average_high: f64,

    /// Window-average cutoff for a medium decision.
    #[serde(default = "default_average_medium")]
    pub average_medium: f64,
}

impl Default for UserRiskConfig {
    fn default() -> Self {
        Self {
            history_window: default_history_window(),
            current_critical: default_current_critical(),
            average_critical: default_average_critical(),
            current_high: default_current_high(),
            average_high: default_average_high(),
            average_medium: default_average_medium(),
        }
    }
}

fn default_history_window() -> usize {
    5
}

fn default_current_critical() -> f64 {
    0.8
}

fn default_average_critical() -> f64 {
    0.7
}

fn default_current_high() -> f64 {
    0.6
}

fn default_average_high() -> f64 {
    0.5
}

fn default_average_medium() -> f64 {
    0.3
}

/// Crisis-resources directory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Region whose compiled-in directory is served (e.g. "us").
    #[serde(default = "default_region")]
    pub region: String,

    /// Additional entries appended to the compiled-in directory.
    #[serde(default)]
    pub extra: Vec<ResourceEntry>,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            extra: Vec::new(),
        }
    }
}

fn default_region() -> String {
    "us".to_string()
}

/// A single configured crisis-resource entry.
///
/// `kind` is validated against the resource taxonomy when the directory is
/// built (hotline, text, emergency, directory).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceEntry {
    pub kind: String,
    pub name: String,
    pub contact: String,
    pub description: String,
}
