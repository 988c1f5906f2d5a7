//! # Diagnosis Rendering
//!
//! Human-readable and JSON renderings of a [`Verdict`].

use std::io::Write;

use gradcheck_engine::Verdict;
use serde::Serialize;

use crate::{EXIT_PASSED, EXIT_PENDING};

/// Machine-readable diagnosis for `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub passed: bool,
    pub reasons: Vec<&'static str>,
    /// Failed rules with their cause (`unmet` or `fault`).
    pub failed_rules: &'a [gradcheck_engine::FailedRule],
}

impl<'a> From<&'a Verdict> for JsonReport<'a> {
    fn from(verdict: &'a Verdict) -> Self {
        Self {
            passed: verdict.passed,
            reasons: verdict.reasons(),
            failed_rules: &verdict.failed_rules,
        }
    }
}

/// Write the diagnosis as text.
pub fn write_text(out: &mut impl Write, verdict: &Verdict) -> std::io::Result<()> {
    if verdict.passed {
        writeln!(out, "¡Felicidades!")?;
        writeln!(out, "Cumples con todos los requisitos para titularte.")?;
        return Ok(());
    }

    writeln!(out, "Requisitos Pendientes")?;
    writeln!(out, "Aún no puedes titularte por las siguientes razones:")?;
    for reason in verdict.reasons() {
        writeln!(out, "  - {reason}")?;
    }
    Ok(())
}

/// Write the diagnosis as pretty-printed JSON.
pub fn write_json(out: &mut impl Write, verdict: &Verdict) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::from(verdict))?;
    writeln!(out)?;
    Ok(())
}

/// Process exit code for a verdict.
pub fn exit_code(verdict: &Verdict) -> u8 {
    if verdict.passed {
        EXIT_PASSED
    } else {
        EXIT_PENDING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradcheck_core::graduation::{self, passing_facts};
    use gradcheck_engine::InferenceEngine;

    fn verdict_for(facts: &gradcheck_core::FactSet) -> Verdict {
        InferenceEngine::graduation().unwrap().evaluate(facts)
    }

    #[test]
    fn passing_text_congratulates() {
        let mut out = Vec::new();
        write_text(&mut out, &verdict_for(&passing_facts())).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("¡Felicidades!"));
        assert!(!text.contains("  - "));
    }

    #[test]
    fn failing_text_lists_one_line_per_reason() {
        let facts = passing_facts()
            .with(graduation::TITLE_FEE_PAID, false)
            .with(graduation::DEBT_LAB, true);
        let mut out = Vec::new();
        write_text(&mut out, &verdict_for(&facts)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Requisitos Pendientes"));
        assert_eq!(text.lines().filter(|l| l.starts_with("  - ")).count(), 2);
    }

    #[test]
    fn json_report_shape() {
        let facts = passing_facts().with(graduation::CREDITS_PERCENTAGE, "cien");
        let mut out = Vec::new();
        write_json(&mut out, &verdict_for(&facts)).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["passed"], false);
        assert_eq!(json["reasons"].as_array().unwrap().len(), 1);
        assert_eq!(json["failed_rules"][0]["cause"]["kind"], "fault");
    }

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(&verdict_for(&passing_facts())), EXIT_PASSED);
        assert_eq!(
            exit_code(&verdict_for(&gradcheck_core::FactSet::new())),
            EXIT_PENDING
        );
    }
}
