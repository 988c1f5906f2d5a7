//! # Catalog Listing
//!
//! `gradcheck rules` and `gradcheck questions`.

use std::io::Write;

use anyhow::Result;
use gradcheck_core::RuleCatalog;

/// Print each rule with its fact keys and description.
pub fn write_rules(out: &mut impl Write, catalog: &RuleCatalog) -> Result<()> {
    for (i, rule) in catalog.rules().iter().enumerate() {
        writeln!(out, "{}. {} [{}]", i + 1, rule.name, rule.fact_keys.join(", "))?;
        writeln!(out, "   {}", rule.description)?;
    }
    Ok(())
}

/// Print the questionnaire as a JSON array.
pub fn write_questions(out: &mut impl Write, catalog: &RuleCatalog) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, catalog.questions())?;
    writeln!(out)?;
    Ok(())
}
