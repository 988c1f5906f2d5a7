//! # Ask Subcommand
//!
//! Walks the catalog questionnaire on a terminal, collects one answer per
//! question into a [`FactSet`], then evaluates it. Invalid answers are
//! re-prompted; end of input before the last question is an error.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use clap::Args;
use gradcheck_core::{FactSet, Question, QuestionType};
use gradcheck_engine::InferenceEngine;
use serde_json::Value;

use crate::report;

/// Arguments for the `gradcheck ask` subcommand.
#[derive(Args, Debug, Default)]
pub struct AskArgs {
    /// Print the diagnosis as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the ask subcommand on the process's stdin/stdout.
pub fn run_ask(args: &AskArgs, engine: &InferenceEngine) -> Result<u8> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_ask_with(args, engine, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute the ask subcommand over arbitrary streams.
pub fn run_ask_with(
    args: &AskArgs,
    engine: &InferenceEngine,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<u8> {
    let facts = collect_facts(engine.catalog().questions(), input, out)?;
    tracing::info!(answers = facts.len(), "questionnaire completed");

    let verdict = engine.evaluate(&facts);
    writeln!(out)?;
    if args.json {
        report::write_json(out, &verdict)?;
    } else {
        report::write_text(out, &verdict)?;
    }
    Ok(report::exit_code(&verdict))
}

/// Ask every question in order and return the answers as facts.
pub fn collect_facts(
    questions: &[Question],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<FactSet> {
    let mut facts = FactSet::new();
    for question in questions {
        let answer = prompt(question, input, out)?;
        facts.insert(question.key, answer);
    }
    Ok(facts)
}

fn prompt(question: &Question, input: &mut impl BufRead, out: &mut impl Write) -> Result<Value> {
    loop {
        write!(out, "{} {} ", question.text, hint(question.kind))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input ended before question '{}' was answered", question.key);
        }

        match parse_answer(question.kind, &line) {
            Some(value) => return Ok(value),
            None => {
                tracing::debug!(key = question.key, answer = line.trim(), "rejected answer");
                writeln!(out, "{}", retry_message(question.kind))?;
            }
        }
    }
}

fn hint(kind: QuestionType) -> &'static str {
    match kind {
        QuestionType::Numeric => "[0-100]:",
        QuestionType::Boolean => "[s/n]:",
    }
}

fn retry_message(kind: QuestionType) -> &'static str {
    match kind {
        QuestionType::Numeric => "Respuesta no válida: escribe un número.",
        QuestionType::Boolean => "Respuesta no válida: responde s o n.",
    }
}

/// Parse one typed answer. `None` means the answer should be asked again.
pub fn parse_answer(kind: QuestionType, raw: &str) -> Option<Value> {
    let answer = raw.trim();
    match kind {
        QuestionType::Numeric => parse_number(answer).map(number_value),
        QuestionType::Boolean => parse_bool(answer).map(Value::Bool),
    }
}

fn parse_number(answer: &str) -> Option<f64> {
    let answer = answer.strip_suffix('%').unwrap_or(answer).trim_end();
    answer
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

// Whole numbers stay integers in the fact set, so `100` reads back as `100`.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

fn parse_bool(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "s" | "si" | "sí" | "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradcheck_core::graduation;
    use std::io::Cursor;

    fn engine() -> InferenceEngine {
        InferenceEngine::graduation().unwrap()
    }

    #[test]
    fn boolean_answers() {
        for yes in ["s", "Si", "sí", "SÍ", "y", "yes", "true", "1", "  s  "] {
            assert_eq!(parse_answer(QuestionType::Boolean, yes), Some(Value::Bool(true)), "{yes}");
        }
        for no in ["n", "No", "false", "0"] {
            assert_eq!(parse_answer(QuestionType::Boolean, no), Some(Value::Bool(false)), "{no}");
        }
        for bad in ["", "quizá", "2", "nope"] {
            assert_eq!(parse_answer(QuestionType::Boolean, bad), None, "{bad}");
        }
    }

    #[test]
    fn numeric_answers() {
        assert_eq!(parse_answer(QuestionType::Numeric, "100"), Some(Value::from(100)));
        assert_eq!(parse_answer(QuestionType::Numeric, " 100% "), Some(Value::from(100)));
        assert_eq!(parse_answer(QuestionType::Numeric, "87.5%"), Some(Value::from(87.5)));
        assert_eq!(parse_answer(QuestionType::Numeric, "87,5"), Some(Value::from(87.5)));
        assert_eq!(parse_answer(QuestionType::Numeric, "cien"), None);
        assert_eq!(parse_answer(QuestionType::Numeric, "NaN"), None);
    }

    #[test]
    fn collects_one_fact_per_question() {
        let questions = graduation::questions();
        let mut input = Cursor::new("100\ns\ns\ns\ns\ns\nn\nn\nn\ns\n");
        let mut out = Vec::new();
        let facts = collect_facts(&questions, &mut input, &mut out).unwrap();
        assert_eq!(facts, graduation::passing_facts());
    }

    #[test]
    fn invalid_answer_is_asked_again() {
        let questions = &graduation::questions()[..1];
        let mut input = Cursor::new("muchos\n95\n");
        let mut out = Vec::new();
        let facts = collect_facts(questions, &mut input, &mut out).unwrap();
        assert_eq!(facts.number(graduation::CREDITS_PERCENTAGE), Ok(95.0));

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches(questions[0].text).count(), 2);
        assert!(transcript.contains("escribe un número"));
    }

    #[test]
    fn early_end_of_input_is_an_error() {
        let mut input = Cursor::new("100\ns\n");
        let mut out = Vec::new();
        let err = collect_facts(&graduation::questions(), &mut input, &mut out).unwrap_err();
        assert!(err.to_string().contains("professional_practices_completed"));
    }

    #[test]
    fn run_ask_reports_pending_requirements() {
        let mut input = Cursor::new("80\ns\ns\ns\ns\ns\nn\nn\nn\nn\n");
        let mut out = Vec::new();
        let code = run_ask_with(&AskArgs::default(), &engine(), &mut input, &mut out).unwrap();
        assert_eq!(code, crate::EXIT_PENDING);

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Requisitos Pendientes"));
        assert_eq!(transcript.lines().filter(|l| l.starts_with("  - ")).count(), 2);
    }

    #[test]
    fn run_ask_passes() {
        let mut input = Cursor::new("100\nsi\nsi\nsi\nsi\nsi\nno\nno\nno\nsi\n");
        let mut out = Vec::new();
        let code = run_ask_with(&AskArgs { json: true }, &engine(), &mut input, &mut out).unwrap();
        assert_eq!(code, crate::EXIT_PASSED);
    }
}
