//! # gradcheck CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gradcheck_cli::ask::{run_ask, AskArgs};
use gradcheck_cli::evaluate::{run_evaluate, EvaluateArgs};
use gradcheck_cli::{catalog, EXIT_ERROR, EXIT_PASSED};
use gradcheck_engine::InferenceEngine;

/// Graduation requirement checker.
///
/// Asks about (or reads) a student's academic and administrative status and
/// reports which graduation requirements are still pending.
#[derive(Parser, Debug)]
#[command(name = "gradcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer the questionnaire interactively and get a diagnosis.
    Ask(AskArgs),

    /// Evaluate a JSON fact object from a file or stdin.
    Evaluate(EvaluateArgs),

    /// List the requirement rules.
    Rules,

    /// Print the questionnaire as JSON.
    Questions,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout stays parseable with --json.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> Result<u8> {
    let engine = InferenceEngine::graduation().context("invalid rule catalog")?;
    tracing::debug!(rules = engine.rule_count(), "rule catalog loaded");

    match command {
        Commands::Ask(args) => run_ask(&args, &engine),
        Commands::Evaluate(args) => run_evaluate(&args, &engine),
        Commands::Rules => {
            catalog::write_rules(&mut std::io::stdout().lock(), engine.catalog())?;
            Ok(EXIT_PASSED)
        }
        Commands::Questions => {
            catalog::write_questions(&mut std::io::stdout().lock(), engine.catalog())?;
            Ok(EXIT_PASSED)
        }
    }
}
