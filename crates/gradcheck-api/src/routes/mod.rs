//! # API Route Modules
//!
//! - `evaluate`: `POST /api/evaluate`: run the inference engine over a
//!   submitted fact set and report the unmet requirements.
//! - `catalog`: `GET /api/questions` and `GET /api/rules`: read-only
//!   catalog metadata for fact-collection UIs.

pub mod catalog;
pub mod evaluate;
