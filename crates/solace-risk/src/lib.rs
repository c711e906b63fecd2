// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message-level crisis detection and user-level risk aggregation.
//!
//! The two core call contracts of the Solace risk-triage core:
//!
//! - [`analyze_message`] scores a single message for crisis indicators
//!   using layered pattern matching, sentiment blending, and
//!   protective-factor discounting, and classifies it into a risk level
//!   with an escalation flag.
//! - [`evaluate_user_risk`] decides, from a rolling history of recent
//!   scores plus the newest one, whether a user's standing risk level
//!   should change and to what value.
//!
//! Both are pure functions over caller-supplied data: no internal storage,
//! no I/O, trivially safe to invoke concurrently. The configurable-threshold
//! variants live on [`RiskAnalyzer`] and [`RiskAggregator`]; the
//! [`TriagePipeline`] wires both together with the external sentiment seam.

pub mod aggregator;
pub mod analyzer;
pub mod patterns;
pub mod pipeline;

pub use aggregator::RiskAggregator;
pub use analyzer::RiskAnalyzer;
pub use pipeline::{TriageOutcome, TriagePipeline};

use solace_core::{MessageRiskResult, RiskDecision};

/// Score a single message with the default (conservative) thresholds.
///
/// `sentiment_score` is an externally computed scalar in [-1.0, 1.0],
/// negative meaning distressed; `None` degrades to a neutral contribution.
pub fn analyze_message(text: &str, sentiment_score: Option<f64>) -> MessageRiskResult {
    RiskAnalyzer::default().analyze(text, sentiment_score)
}

/// Evaluate a user's standing risk level with the default thresholds and
/// the given "threshold for concern" (newest-score cutoff for `high`,
/// default 0.6 via [`DEFAULT_CONCERN_THRESHOLD`]).
///
/// `history` is ordered oldest first; only the trailing five entries are
/// consulted, with `current_score` appended before averaging.
pub fn evaluate_user_risk(history: &[f64], current_score: f64, threshold: f64) -> RiskDecision {
    RiskAggregator::with_threshold(threshold).evaluate(history, current_score)
}

/// Default "threshold for concern" for [`evaluate_user_risk`].
pub const DEFAULT_CONCERN_THRESHOLD: f64 = 0.6;
