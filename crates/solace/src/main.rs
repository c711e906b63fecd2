// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Solace - risk-triage core of a mental-health companion platform.
//!
//! This is the binary entry point for the Solace triage tooling.

use clap::{Parser, Subcommand};

mod analyze;
mod assess;
mod resources;

/// Solace - message risk triage for a mental-health companion.
#[derive(Parser, Debug)]
#[command(name = "solace", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a message for crisis indicators.
    Analyze {
        /// Message text; read from stdin when omitted.
        text: Option<String>,
        /// Externally computed sentiment score in [-1.0, 1.0].
        #[arg(long, allow_hyphen_values = true)]
        sentiment: Option<f64>,
        /// Comma-separated recent risk scores, oldest first.
        #[arg(long)]
        history: Option<String>,
        /// Output structured JSON for scripting.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Evaluate a user's standing risk level from recent scores.
    Assess {
        /// The newest message risk score.
        score: f64,
        /// Comma-separated recent risk scores, oldest first.
        #[arg(long)]
        history: Option<String>,
        /// Newest-score cutoff for a high decision.
        #[arg(long)]
        threshold: Option<f64>,
        /// Output structured JSON for scripting.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Print the crisis-resources directory for the configured region.
    Resources {
        /// Output structured JSON for scripting.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Show the effective configuration.
    Config,
}

fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match solace_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            solace_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Analyze {
            text,
            sentiment,
            history,
            json,
            plain,
        }) => analyze::run_analyze(&config, text, sentiment, history.as_deref(), json, plain),
        Some(Commands::Assess {
            score,
            history,
            threshold,
            json,
            plain,
        }) => assess::run_assess(&config, score, history.as_deref(), threshold, json, plain),
        Some(Commands::Resources { json, plain }) => {
            resources::run_resources(&config, json, plain)
        }
        Some(Commands::Config) => run_config(&config),
        None => {
            println!("solace: use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("solace: {err}");
        std::process::exit(1);
    }
}

/// Run the `solace config` command: echo the effective configuration.
fn run_config(config: &solace_config::SolaceConfig) -> Result<(), solace_core::SolaceError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| solace_core::SolaceError::Internal(format!("config render failed: {e}")))?;
    print!("{rendered}");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("solace={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed)
        let config = solace_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.agent.name, "solace");
    }

    #[test]
    fn cli_parses_analyze_with_flags() {
        use clap::Parser;

        let cli = super::Cli::try_parse_from([
            "solace",
            "analyze",
            "rough day",
            "--sentiment",
            "-0.4",
            "--history",
            "0.1,0.2",
            "--json",
        ])
        .expect("should parse");
        match cli.command {
            Some(super::Commands::Analyze {
                text,
                sentiment,
                history,
                json,
                plain,
            }) => {
                assert_eq!(text.as_deref(), Some("rough day"));
                assert_eq!(sentiment, Some(-0.4));
                assert_eq!(history.as_deref(), Some("0.1,0.2"));
                assert!(json);
                assert!(!plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
