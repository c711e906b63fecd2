// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `solace resources` command implementation.
//!
//! Prints the crisis-resources directory for the configured region, in
//! full and unranked, the way crisis-support surfaces present it.

use std::io::IsTerminal;

use solace_config::SolaceConfig;
use solace_core::SolaceError;
use solace_resources::CrisisDirectory;

/// Run the `solace resources` command.
pub fn run_resources(config: &SolaceConfig, json: bool, plain: bool) -> Result<(), SolaceError> {
    let directory = CrisisDirectory::from_config(&config.resources)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&directory)
                .map_err(|e| SolaceError::Internal(format!("serialization failed: {e}")))?
        );
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    println!();
    println!("  crisis resources ({})", directory.region());
    println!("  {}", "-".repeat(50));
    for resource in directory.all() {
        let kind = if use_color {
            use colored::Colorize;
            format!("[{}]", resource.kind).cyan().to_string()
        } else {
            format!("[{}]", resource.kind)
        };
        println!("  {kind:<12} {:<32} {}", resource.name, resource.contact);
        if !resource.description.is_empty() {
            println!("  {:<12} {}", "", resource.description);
        }
    }
    Ok(())
}
