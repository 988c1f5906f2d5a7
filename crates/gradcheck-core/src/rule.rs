//! # Rule and Question Records
//!
//! A [`Rule`] is a named predicate over a [`FactSet`] plus the message shown
//! when it does not hold. A [`Question`] describes how a fact-collection UI
//! should ask for one fact key; the engine never reads questions.

use serde::{Deserialize, Serialize};

use crate::error::FactError;
use crate::facts::FactSet;

/// Predicate signature shared by every rule.
///
/// Predicates are pure: they borrow the fact set immutably and report a
/// mistyped value as `Err` instead of guessing.
pub type Predicate = fn(&FactSet) -> Result<bool, FactError>;

/// One graduation requirement.
#[derive(Clone)]
pub struct Rule {
    /// Short identifier, unique within a catalog.
    pub name: &'static str,
    /// Documentation only; never evaluated.
    pub description: &'static str,
    /// Fact keys the predicate reads.
    pub fact_keys: &'static [&'static str],
    /// User-facing text shown when the predicate returns `false`.
    pub error_message: &'static str,
    predicate: Predicate,
}

impl Rule {
    /// Build a rule record. Validation happens when the rule joins a catalog.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        fact_keys: &'static [&'static str],
        predicate: Predicate,
        error_message: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            fact_keys,
            error_message,
            predicate,
        }
    }

    /// Apply the predicate to a fact set.
    pub fn check(&self, facts: &FactSet) -> Result<bool, FactError> {
        (self.predicate)(facts)
    }

    /// Serializable view of the rule's metadata.
    pub fn summary(&self) -> RuleSummary {
        RuleSummary {
            name: self.name.to_string(),
            description: self.description.to_string(),
            error_message: self.error_message.to_string(),
            fact_keys: self.fact_keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("fact_keys", &self.fact_keys)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Rule {
    // Names are unique within a validated catalog.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Rule {}

/// Owned, serializable rule metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    /// Rule name.
    pub name: String,
    /// What the rule checks.
    pub description: String,
    /// Message shown when the rule fails.
    pub error_message: String,
    /// Fact keys the predicate reads.
    pub fact_keys: Vec<String>,
}

/// How a UI should render the input for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// A number (the credit percentage).
    Numeric,
    /// A yes/no answer.
    Boolean,
}

impl QuestionType {
    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prompt metadata for one fact key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Fact key the answer is stored under.
    pub key: &'static str,
    /// Prompt shown to the student.
    pub text: &'static str,
    /// Expected answer kind.
    #[serde(rename = "type")]
    pub kind: QuestionType,
}

impl Question {
    /// Build a question record.
    pub const fn new(key: &'static str, text: &'static str, kind: QuestionType) -> Self {
        Self { key, text, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(_: &FactSet) -> Result<bool, FactError> {
        Ok(true)
    }

    #[test]
    fn check_invokes_predicate() {
        let rule = Rule::new("r", "d", &["k"], |f| f.flag("k"), "m");
        assert_eq!(rule.check(&FactSet::new()), Ok(false));
        assert_eq!(rule.check(&FactSet::new().with("k", true)), Ok(true));
    }

    #[test]
    fn summary_copies_metadata() {
        let rule = Rule::new("name", "desc", &["a", "b"], always, "msg");
        let summary = rule.summary();
        assert_eq!(summary.name, "name");
        assert_eq!(summary.description, "desc");
        assert_eq!(summary.error_message, "msg");
        assert_eq!(summary.fact_keys, vec!["a", "b"]);
    }

    #[test]
    fn debug_omits_predicate() {
        let rule = Rule::new("name", "desc", &["a"], always, "msg");
        let dbg = format!("{rule:?}");
        assert!(dbg.contains("name"));
        assert!(!dbg.contains("predicate"));
    }

    #[test]
    fn question_serializes_type_field() {
        let q = Question::new("debt_lab", "¿Adeudos?", QuestionType::Boolean);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["key"], "debt_lab");
        assert_eq!(json["type"], "boolean");
    }
}
