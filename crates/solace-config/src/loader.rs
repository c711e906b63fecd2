// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./solace.toml` > `~/.config/solace/solace.toml` > `/etc/solace/solace.toml`
//! with environment variable overrides via `SOLACE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SolaceConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/solace/solace.toml` (system-wide)
/// 3. `~/.config/solace/solace.toml` (user XDG config)
/// 4. `./solace.toml` (local directory)
/// 5. `SOLACE_*` environment variables
pub fn load_config() -> Result<SolaceConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SolaceConfig::default()))
        .merge(Toml::file("/etc/solace/solace.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("solace/solace.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("solace.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SolaceConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SolaceConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SolaceConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SolaceConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `SOLACE_RISK_MESSAGE_CRITICAL_CUTOFF`
/// must map to `risk.message.critical_cutoff`, not `risk.message.critical.cutoff`.
fn env_provider() -> Env {
    Env::prefixed("SOLACE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: SOLACE_RISK_USER_CURRENT_HIGH -> "risk_user_current_high"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("risk_message_", "risk.message.", 1)
            .replacen("risk_user_", "risk.user.", 1)
            .replacen("resources_", "resources.", 1);
        mapped.into()
    })
}
