//! # Error Hierarchy
//!
//! Structured error types for gradcheck, built with `thiserror`.
//!
//! Two families live here:
//!
//! - [`FactError`]: a fact value of the wrong JSON type. Raised by the
//!   typed accessors on [`FactSet`](crate::FactSet) and trapped per rule by
//!   the inference engine; it never escapes an evaluation.
//! - [`CatalogError`]: a malformed rule catalog. This is a programming-time
//!   defect and aborts startup.

use thiserror::Error;

/// A fact value could not be read as the type a predicate expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactError {
    /// The key is present but holds a value of the wrong JSON type.
    #[error("fact \"{key}\" must be {expected}, found {found}")]
    TypeMismatch {
        /// The fact key that was read.
        key: String,
        /// The expected JSON type.
        expected: &'static str,
        /// The JSON type actually supplied.
        found: &'static str,
    },
}

/// Structural defects detected while building a [`RuleCatalog`](crate::RuleCatalog).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no rules at all.
    #[error("rule catalog must contain at least one rule")]
    Empty,

    /// A rule is missing one of its required fields.
    #[error("rule \"{rule}\" is missing required field `{field}`")]
    MissingField {
        /// Name of the offending rule (may be empty when `name` is the missing field).
        rule: String,
        /// The field that is empty.
        field: &'static str,
    },

    /// Two rules share the same name.
    #[error("duplicate rule name \"{0}\"")]
    DuplicateRule(String),

    /// Two questions ask for the same fact key.
    #[error("duplicate question key \"{0}\"")]
    DuplicateQuestion(String),

    /// A question collects a fact key that no rule reads.
    #[error("question key \"{0}\" is not read by any rule")]
    UnknownQuestionKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_message_names_key_and_types() {
        let err = FactError::TypeMismatch {
            key: "credits_percentage".into(),
            expected: "number",
            found: "string",
        };
        let msg = err.to_string();
        assert!(msg.contains("credits_percentage"));
        assert!(msg.contains("number"));
        assert!(msg.contains("string"));
    }

    #[test]
    fn catalog_error_display_messages() {
        assert!(CatalogError::Empty.to_string().contains("at least one rule"));
        assert!(CatalogError::DuplicateRule("x".into()).to_string().contains('x'));
        assert!(CatalogError::DuplicateQuestion("k".into())
            .to_string()
            .contains('k'));
        assert!(CatalogError::UnknownQuestionKey("z".into())
            .to_string()
            .contains('z'));
        let missing = CatalogError::MissingField {
            rule: "Pago".into(),
            field: "error_message",
        };
        assert!(missing.to_string().contains("error_message"));
    }
}
