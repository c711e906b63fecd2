// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-level risk aggregation over a rolling score history.
//!
//! Given a caller-supplied history of recent per-message scores plus the
//! newest score, decides whether the user's standing risk level should
//! change and to what value. The caller owns the history and persists the
//! decision; this module holds no state.

use solace_config::model::UserRiskConfig;
use solace_core::{RiskDecision, RiskLevel};

/// Decides whether a user's standing risk level should be updated.
#[derive(Debug, Clone)]
pub struct RiskAggregator {
    config: UserRiskConfig,
}

impl RiskAggregator {
    /// Create an aggregator with the given thresholds.
    pub fn new(config: &UserRiskConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Create a default aggregator with the high-tier newest-score cutoff
    /// (the "threshold for concern") overridden.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            config: UserRiskConfig {
                current_high: threshold,
                ..UserRiskConfig::default()
            },
        }
    }

    /// Evaluate the newest score against the rolling history.
    ///
    /// `history` is ordered oldest first; only the trailing
    /// `history_window` entries (default 5) are consulted, with
    /// `current_score` appended before averaging.
    ///
    /// Only a computed `Low` yields `should_update = false`: the user's
    /// standing level ratchets upward through this function and is never
    /// auto-downgraded by it. Callers must leave the stored level untouched
    /// on a non-update rather than writing `Low`.
    pub fn evaluate(&self, history: &[f64], current_score: f64) -> RiskDecision {
        let tail = &history[history.len().saturating_sub(self.config.history_window)..];
        let sum: f64 = tail.iter().sum::<f64>() + current_score;
        let avg_score = sum / (tail.len() + 1) as f64;

        // First match wins.
        if current_score >= self.config.current_critical
            || avg_score >= self.config.average_critical
        {
            RiskDecision {
                should_update: true,
                new_level: RiskLevel::Critical,
            }
        } else if current_score >= self.config.current_high
            || avg_score >= self.config.average_high
        {
            RiskDecision {
                should_update: true,
                new_level: RiskLevel::High,
            }
        } else if avg_score >= self.config.average_medium {
            RiskDecision {
                should_update: true,
                new_level: RiskLevel::Medium,
            }
        } else {
            RiskDecision {
                should_update: false,
                new_level: RiskLevel::Low,
            }
        }
    }
}

impl Default for RiskAggregator {
    fn default() -> Self {
        Self::new(&UserRiskConfig::default())
    }
}
