//! # Verdicts
//!
//! The outcome of one evaluation: an overall pass flag and the failed
//! rules in catalog order, each carrying its full metadata so callers can
//! surface `error_message` without going back to the catalog.

use gradcheck_core::Rule;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Why a rule ended up in the failed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureCause {
    /// The predicate evaluated to `false`.
    Unmet,
    /// The predicate faulted (mistyped fact or panic) and was failed safe.
    Fault(String),
}

impl FailureCause {
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }
}

/// A rule that did not hold.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedRule {
    pub rule: Rule,
    pub cause: FailureCause,
}

impl FailedRule {
    pub fn name(&self) -> &'static str {
        self.rule.name
    }

    pub fn description(&self) -> &'static str {
        self.rule.description
    }

    pub fn error_message(&self) -> &'static str {
        self.rule.error_message
    }
}

impl Serialize for FailedRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("FailedRule", 4)?;
        s.serialize_field("name", self.name())?;
        s.serialize_field("description", self.description())?;
        s.serialize_field("error_message", self.error_message())?;
        s.serialize_field("cause", &self.cause)?;
        s.end()
    }
}

/// Result of evaluating a whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// `true` iff no rule failed.
    pub passed: bool,
    /// Failed rules, in catalog order.
    pub failed_rules: Vec<FailedRule>,
}

impl Verdict {
    pub(crate) fn from_failures(failed_rules: Vec<FailedRule>) -> Self {
        Self {
            passed: failed_rules.is_empty(),
            failed_rules,
        }
    }

    /// User-facing reasons, one per failed rule.
    pub fn reasons(&self) -> Vec<&'static str> {
        self.failed_rules.iter().map(FailedRule::error_message).collect()
    }

    /// Names of the failed rules.
    pub fn failed_names(&self) -> Vec<&'static str> {
        self.failed_rules.iter().map(FailedRule::name).collect()
    }

    /// Number of rules that failed because their predicate faulted.
    pub fn fault_count(&self) -> usize {
        self.failed_rules.iter().filter(|f| f.cause.is_fault()).count()
    }
}
