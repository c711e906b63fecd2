// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: every score-typed knob must lie in [0, 1], cutoffs must be
//! strictly ordered within their group, and the history window must be at
//! least 1. Misordered thresholds would silently change which messages
//! escalate, so they are rejected at startup rather than tolerated.

use crate::diagnostic::ConfigError;
use crate::model::SolaceConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SolaceConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate log level
    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.agent.log_level
            ),
        });
    }

    // Validate every score-typed knob is within [0, 1]
    let msg = &config.risk.message;
    let user = &config.risk.user;
    let unit_range_knobs: &[(&str, f64)] = &[
        ("risk.message.critical_floor", msg.critical_floor),
        ("risk.message.high_floor", msg.high_floor),
        ("risk.message.medium_floor", msg.medium_floor),
        ("risk.message.sentiment_weight", msg.sentiment_weight),
        ("risk.message.protective_discount", msg.protective_discount),
        ("risk.message.critical_cutoff", msg.critical_cutoff),
        ("risk.message.high_cutoff", msg.high_cutoff),
        ("risk.message.medium_cutoff", msg.medium_cutoff),
        ("risk.user.current_critical", user.current_critical),
        ("risk.user.average_critical", user.average_critical),
        ("risk.user.current_high", user.current_high),
        ("risk.user.average_high", user.average_high),
        ("risk.user.average_medium", user.average_medium),
    ];
    for (key, value) in unit_range_knobs {
        if !(0.0..=1.0).contains(value) {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be within [0.0, 1.0], got {value}"),
            });
        }
    }

    // Validate tier floors are strictly descending
    if !(msg.critical_floor > msg.high_floor && msg.high_floor > msg.medium_floor) {
        errors.push(ConfigError::Validation {
            message: format!(
                "risk.message floors must be strictly descending (critical > high > medium), \
                 got {} / {} / {}",
                msg.critical_floor, msg.high_floor, msg.medium_floor
            ),
        });
    }

    // Validate classification cutoffs are strictly descending
    if !(msg.critical_cutoff > msg.high_cutoff && msg.high_cutoff > msg.medium_cutoff) {
        errors.push(ConfigError::Validation {
            message: format!(
                "risk.message cutoffs must be strictly descending (critical > high > medium), \
                 got {} / {} / {}",
                msg.critical_cutoff, msg.high_cutoff, msg.medium_cutoff
            ),
        });
    }

    // Validate aggregator cutoffs keep critical above high
    if user.current_critical <= user.current_high {
        errors.push(ConfigError::Validation {
            message: format!(
                "risk.user.current_critical must exceed risk.user.current_high, got {} <= {}",
                user.current_critical, user.current_high
            ),
        });
    }
    if !(user.average_critical > user.average_high && user.average_high > user.average_medium) {
        errors.push(ConfigError::Validation {
            message: format!(
                "risk.user average cutoffs must be strictly descending \
                 (critical > high > medium), got {} / {} / {}",
                user.average_critical, user.average_high, user.average_medium
            ),
        });
    }

    // Validate history window
    if user.history_window < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "risk.user.history_window must be at least 1, got {}",
                user.history_window
            ),
        });
    }

    // Validate resources section
    if config.resources.region.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "resources.region must not be empty".to_string(),
        });
    }
    for (i, entry) in config.resources.extra.iter().enumerate() {
        if entry.name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("resources.extra[{i}].name must not be empty"),
            });
        }
        if entry.contact.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("resources.extra[{i}].contact must not be empty"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
