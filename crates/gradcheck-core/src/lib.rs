#![deny(missing_docs)]

//! # gradcheck-core: Foundational Types
//!
//! Defines what gradcheck knows about graduation requirements. Every other
//! crate in the workspace depends on `gradcheck-core`; it depends on nothing
//! internal.
//!
//! ## Contents
//!
//! - **Facts** (`facts.rs`): [`FactSet`], a JSON-valued map with defaulting
//!   typed accessors.
//! - **Rules** (`rule.rs`): [`Rule`] records carrying a plain function
//!   pointer predicate, and [`Question`] prompt metadata.
//! - **Catalog** (`catalog.rs`): [`RuleCatalog`], validated at construction.
//! - **Graduation** (`graduation.rs`): the standard requirement rules and
//!   questionnaire.
//!
//! ## Crate Policy
//!
//! - Predicates are pure and never panic on bad input; mistyped values are
//!   reported as [`FactError`].
//! - Catalog defects are reported as [`CatalogError`] at construction.
//! - No `.unwrap()` outside tests.

pub mod catalog;
pub mod error;
pub mod facts;
pub mod graduation;
pub mod rule;

pub use catalog::RuleCatalog;
pub use error::{CatalogError, FactError};
pub use facts::FactSet;
pub use rule::{Predicate, Question, QuestionType, Rule, RuleSummary};
