//! # Rule Catalog
//!
//! An immutable, ordered collection of [`Rule`]s plus the parallel list of
//! [`Question`]s used to collect their facts.
//!
//! ## Invariants
//!
//! Checked once in [`RuleCatalog::new`]; a catalog that exists is valid:
//! - at least one rule;
//! - every rule has a name, an error message and at least one fact key;
//! - rule names are unique;
//! - question keys are unique and each is read by some rule.
//!
//! Catalog order only fixes the order of the failed-rule list. Rules are
//! independent of each other.

use std::collections::{BTreeSet, HashSet};

use crate::error::CatalogError;
use crate::rule::{Question, Rule};

/// A validated, read-only rule catalog.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
    questions: Vec<Question>,
}

impl RuleCatalog {
    /// Build a catalog, rejecting structural defects.
    pub fn new(rules: Vec<Rule>, questions: Vec<Question>) -> Result<Self, CatalogError> {
        if rules.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut names = HashSet::new();
        for rule in &rules {
            if rule.name.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    rule: String::new(),
                    field: "name",
                });
            }
            if rule.error_message.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    rule: rule.name.to_string(),
                    field: "error_message",
                });
            }
            if rule.fact_keys.is_empty() {
                return Err(CatalogError::MissingField {
                    rule: rule.name.to_string(),
                    field: "fact_keys",
                });
            }
            if !names.insert(rule.name) {
                return Err(CatalogError::DuplicateRule(rule.name.to_string()));
            }
        }

        let read_keys: BTreeSet<&str> = rules
            .iter()
            .flat_map(|r| r.fact_keys.iter().copied())
            .collect();
        let mut asked = HashSet::new();
        for question in &questions {
            if !asked.insert(question.key) {
                return Err(CatalogError::DuplicateQuestion(question.key.to_string()));
            }
            if !read_keys.contains(question.key) {
                return Err(CatalogError::UnknownQuestionKey(question.key.to_string()));
            }
        }

        tracing::debug!(
            rules = rules.len(),
            questions = questions.len(),
            "rule catalog built"
        );

        Ok(Self { rules, questions })
    }

    /// The standard graduation requirement catalog.
    pub fn graduation() -> Result<Self, CatalogError> {
        Self::new(crate::graduation::rules(), crate::graduation::questions())
    }

    /// Rules in catalog order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Questions in prompt order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Every fact key read by some rule, sorted.
    pub fn fact_keys(&self) -> BTreeSet<&'static str> {
        self.rules
            .iter()
            .flat_map(|r| r.fact_keys.iter().copied())
            .collect()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false` for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
