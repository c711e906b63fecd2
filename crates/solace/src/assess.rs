// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `solace assess` command implementation.
//!
//! Runs the user-level aggregator over a supplied score history and newest
//! score, mirroring what the conversation pipeline does after each message.

use std::io::IsTerminal;

use solace_config::model::UserRiskConfig;
use solace_config::SolaceConfig;
use solace_core::{RiskLevel, SolaceError};
use solace_risk::RiskAggregator;

/// Parse a comma-separated list of risk scores, oldest first.
pub fn parse_scores(input: &str) -> Result<Vec<f64>, SolaceError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| SolaceError::Config(format!("invalid score `{part}` in history")))
        })
        .collect()
}

/// Run the `solace assess` command.
pub fn run_assess(
    config: &SolaceConfig,
    score: f64,
    history: Option<&str>,
    threshold: Option<f64>,
    json: bool,
    plain: bool,
) -> Result<(), SolaceError> {
    let history = match history {
        Some(raw) => parse_scores(raw)?,
        None => Vec::new(),
    };

    // A threshold override keeps every other configured knob.
    let aggregator = match threshold {
        Some(t) => RiskAggregator::new(&UserRiskConfig {
            current_high: t,
            ..config.risk.user.clone()
        }),
        None => RiskAggregator::new(&config.risk.user),
    };
    let decision = aggregator.evaluate(&history, score);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&decision)
                .map_err(|e| SolaceError::Internal(format!("serialization failed: {e}")))?
        );
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    println!();
    println!("  solace assess");
    println!("  {}", "-".repeat(50));
    println!("  newest score  {score:.2}");
    println!("  history       {} entries", history.len());
    println!("  new level     {}", level_label(decision.new_level, use_color));
    println!(
        "  update        {}",
        if decision.should_update {
            "yes"
        } else {
            "no (standing level untouched)"
        }
    );
    Ok(())
}

/// Render a risk level, colored by severity when enabled.
pub fn level_label(level: RiskLevel, use_color: bool) -> String {
    if !use_color {
        return level.to_string();
    }
    use colored::Colorize;
    match level {
        RiskLevel::Critical | RiskLevel::High => level.to_string().red().bold().to_string(),
        RiskLevel::Medium => level.to_string().yellow().to_string(),
        RiskLevel::Low => level.to_string().green().to_string(),
    }
}
