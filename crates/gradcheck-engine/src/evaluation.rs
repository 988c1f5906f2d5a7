//! # Inference Engine
//!
//! Applies every catalog rule to a fact set in one synchronous pass and
//! returns a [`Verdict`]. There is no chaining: a rule's outcome never feeds
//! another rule's predicate.
//!
//! ## Fail-safe evaluation
//!
//! Each predicate call is trapped on its own. A mistyped fact
//! (`Err(FactError)`) or a panic inside a predicate marks that rule as
//! failed, is logged at `warn`, and evaluation continues with the next rule.
//! A fault is never reported as "requirement met" and never escapes
//! [`InferenceEngine::evaluate`].
//!
//! ## Thread Safety
//!
//! The engine is immutable after construction and evaluates through `&self`,
//! so one instance behind an `Arc` serves any number of concurrent callers.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use gradcheck_core::{CatalogError, FactSet, Rule, RuleCatalog};

use crate::verdict::{FailedRule, FailureCause, Verdict};

/// Stateless evaluator over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    catalog: Arc<RuleCatalog>,
}

impl InferenceEngine {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self::from_shared(Arc::new(catalog))
    }

    pub fn from_shared(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    /// Engine over the standard graduation catalog.
    pub fn graduation() -> Result<Self, CatalogError> {
        RuleCatalog::graduation().map(Self::new)
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn rule_count(&self) -> usize {
        self.catalog.len()
    }

    /// Evaluate every rule against `facts`.
    ///
    /// Deterministic: the same facts always produce the same verdict, with
    /// failures in catalog order.
    pub fn evaluate(&self, facts: &FactSet) -> Verdict {
        let failed: Vec<FailedRule> = self
            .catalog
            .rules()
            .iter()
            .filter_map(|rule| {
                check_rule(rule, facts).err().map(|cause| FailedRule {
                    rule: rule.clone(),
                    cause,
                })
            })
            .collect();

        tracing::debug!(
            rules = self.catalog.len(),
            failed = failed.len(),
            "evaluation complete"
        );

        Verdict::from_failures(failed)
    }
}

fn check_rule(rule: &Rule, facts: &FactSet) -> Result<(), FailureCause> {
    match panic::catch_unwind(AssertUnwindSafe(|| rule.check(facts))) {
        Ok(Ok(true)) => Ok(()),
        Ok(Ok(false)) => Err(FailureCause::Unmet),
        Ok(Err(e)) => {
            tracing::warn!(rule = rule.name, error = %e, "rule evaluation error, marking rule as failed");
            Err(FailureCause::Fault(e.to_string()))
        }
        Err(payload) => {
            let detail = panic_message(payload.as_ref());
            tracing::warn!(rule = rule.name, panic = %detail, "rule predicate panicked, marking rule as failed");
            Err(FailureCause::Fault(detail))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "predicate panicked".to_string()
    }
}
