//! # Fact Sets
//!
//! The caller-supplied record of a student's status, keyed by requirement.
//!
//! Absent keys (and explicit JSON `null`) resolve to a defined default
//! rather than an error: `false` for flags, `0` for numbers. Missing data
//! therefore means "requirement not met" for every rule that needs a `true`
//! or a threshold, and "no debt" for the debt flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FactError;

/// A mapping from fact key to JSON value.
///
/// Extra keys are kept but never read by the standard catalog. The engine
/// only ever borrows a `FactSet` immutably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactSet(BTreeMap<String, Value>);

impl FactSet {
    /// Create an empty fact set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, convenient for tests and the CLI.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a fact.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a fact, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of facts, including keys no rule reads.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no facts were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read a boolean fact. Absent or `null` reads as `false`.
    pub fn flag(&self, key: &str) -> Result<bool, FactError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(mismatch(key, "boolean", other)),
        }
    }

    /// Read an indicator fact that may arrive as a boolean or a number.
    ///
    /// Absent or `null` reads as `false`; a number is `true` when nonzero.
    pub fn truthy(&self, key: &str) -> Result<bool, FactError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::Number(n)) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
            Some(other) => Err(mismatch(key, "boolean or number", other)),
        }
    }

    /// Read a numeric fact. Absent or `null` reads as `0`.
    pub fn number(&self, key: &str) -> Result<f64, FactError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(0.0),
            // Only unrepresentable numbers fail `as_f64`; they read as 0 (not met).
            Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or(0.0)),
            Some(other) => Err(mismatch(key, "number", other)),
        }
    }

    /// Build a fact set from an arbitrary JSON value.
    ///
    /// Returns `None` unless the value is a JSON object.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map.into_iter().collect())),
            _ => None,
        }
    }
}

impl FromIterator<(String, Value)> for FactSet {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn mismatch(key: &str, expected: &'static str, found: &Value) -> FactError {
    FactError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: json_type_name(found),
    }
}

/// Name of a JSON value's type, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
