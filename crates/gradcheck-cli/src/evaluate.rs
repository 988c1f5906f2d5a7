//! # Evaluate Subcommand
//!
//! Evaluates a JSON fact object read from a file, or from stdin when no
//! path (or `-`) is given.
//!
//! Returns exit code: 0 when passed, 1 when requirements are pending,
//! 2 on operational error (unreadable input, invalid JSON, non-object).

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Args;
use gradcheck_core::facts::json_type_name;
use gradcheck_core::FactSet;
use gradcheck_engine::InferenceEngine;

use crate::{report, EXIT_ERROR};

/// Arguments for the `gradcheck evaluate` subcommand.
#[derive(Args, Debug, Default)]
pub struct EvaluateArgs {
    /// JSON file holding the fact object. Reads stdin when omitted or `-`.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Print the diagnosis as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the evaluate subcommand on the process's stdin/stdout.
pub fn run_evaluate(args: &EvaluateArgs, engine: &InferenceEngine) -> Result<u8> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_evaluate_with(args, engine, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute the evaluate subcommand over arbitrary streams.
pub fn run_evaluate_with(
    args: &EvaluateArgs,
    engine: &InferenceEngine,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<u8> {
    let facts = match load_facts(args.path.as_deref(), stdin) {
        Ok(facts) => facts,
        Err(e) => {
            tracing::error!("{e:#}");
            return Ok(EXIT_ERROR);
        }
    };
    tracing::info!(facts = facts.len(), "evaluating fact set");

    let verdict = engine.evaluate(&facts);
    if args.json {
        report::write_json(out, &verdict)?;
    } else {
        report::write_text(out, &verdict)?;
    }
    Ok(report::exit_code(&verdict))
}

/// Read and parse the fact object.
pub fn load_facts(path: Option<&Path>, stdin: &mut impl Read) -> Result<FactSet> {
    let (source, raw) = match path {
        Some(p) if p != Path::new("-") => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read {}", p.display()))?;
            (p.display().to_string(), raw)
        }
        _ => {
            let mut raw = String::new();
            stdin
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            ("<stdin>".to_string(), raw)
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {source}"))?;
    let found = json_type_name(&value);
    FactSet::from_json(value)
        .ok_or_else(|| anyhow!("{source}: expected a JSON object, found {found}"))
}
