// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `solace analyze` command implementation.
//!
//! Scores a single message the way the conversation pipeline would: the
//! per-message analyzer first, then the user-level aggregator over any
//! supplied history, printing what the platform would persist.

use std::io::IsTerminal;

use solace_config::SolaceConfig;
use solace_core::SolaceError;
use solace_risk::{RiskAggregator, RiskAnalyzer};

use crate::assess::{level_label, parse_scores};

/// Run the `solace analyze` command.
///
/// Reads the message from the argument or stdin. The sentiment score, when
/// given, stands in for the external sentiment collaborator.
pub fn run_analyze(
    config: &SolaceConfig,
    text: Option<String>,
    sentiment: Option<f64>,
    history: Option<&str>,
    json: bool,
    plain: bool,
) -> Result<(), SolaceError> {
    let text = match text {
        Some(text) => text,
        None => std::io::read_to_string(std::io::stdin())
            .map_err(|e| SolaceError::Internal(format!("failed to read stdin: {e}")))?,
    };
    let history = match history {
        Some(raw) => parse_scores(raw)?,
        None => Vec::new(),
    };

    let result = RiskAnalyzer::new(&config.risk.message).analyze(&text, sentiment);
    let decision = RiskAggregator::new(&config.risk.user).evaluate(&history, result.risk_score);

    if json {
        let output = serde_json::json!({
            "message": result,
            "decision": decision,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output)
                .map_err(|e| SolaceError::Internal(format!("serialization failed: {e}")))?
        );
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    let indicators = if result.indicators.is_empty() {
        "none".to_string()
    } else {
        result
            .indicators
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!();
    println!("  solace analyze");
    println!("  {}", "-".repeat(50));
    println!("  risk score    {:.2}", result.risk_score);
    println!("  risk level    {}", level_label(result.risk_level, use_color));
    println!("  indicators    {indicators}");
    println!(
        "  escalation    {}",
        if result.requires_escalation {
            "required"
        } else {
            "not required"
        }
    );
    println!(
        "  user level    {} ({})",
        level_label(decision.new_level, use_color),
        if decision.should_update {
            "update"
        } else {
            "no update"
        }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use solace_config::SolaceConfig;
    use solace_core::RiskLevel;
    use solace_risk::{RiskAggregator, RiskAnalyzer};

    /// The analyze command composes the same calls the platform makes; the
    /// composition itself must agree with the core crates.
    #[test]
    fn analyze_composition_matches_core() {
        let config = SolaceConfig::default();
        let result =
            RiskAnalyzer::new(&config.risk.message).analyze("I don't want to exist", None);
        let decision =
            RiskAggregator::new(&config.risk.user).evaluate(&[0.2, 0.1], result.risk_score);
        assert_eq!(result.risk_level, RiskLevel::Critical);
        assert!(decision.should_update);
        assert_eq!(decision.new_level, RiskLevel::Critical);
    }
}
