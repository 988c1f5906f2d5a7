//! # gradcheck-engine: Inference Engine
//!
//! Evaluates the rule catalog from `gradcheck-core` against a caller-supplied
//! fact set and reports which requirements are unmet.
//!
//! - **Evaluation** (`evaluation.rs`): [`InferenceEngine`], a single-pass,
//!   fail-safe evaluator. Any predicate fault counts as "not met".
//! - **Verdict** (`verdict.rs`): [`Verdict`] and [`FailedRule`], preserving
//!   catalog order and full rule metadata.
//!
//! ## Crate Policy
//!
//! - Depends only on `gradcheck-core` internally.
//! - `evaluate` never returns an error and never panics on bad input.
//! - No mutable state: the engine is `Send + Sync` and evaluates via `&self`.

pub mod evaluation;
pub mod verdict;

pub use evaluation::InferenceEngine;
pub use verdict::{FailedRule, FailureCause, Verdict};
