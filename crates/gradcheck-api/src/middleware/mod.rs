//! # Middleware Modules
//!
//! Tower layers wrapped around the whole router.

pub mod cors;
pub mod tracing_layer;
