//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Built once at process entry; everything inside is
//! read-only, so no locks are needed.

use std::sync::Arc;

use gradcheck_core::CatalogError;
use gradcheck_engine::InferenceEngine;

use crate::config::ApiConfig;

#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<InferenceEngine>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(engine: InferenceEngine, config: ApiConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }

    /// State over the standard graduation catalog with default configuration.
    pub fn graduation() -> Result<Self, CatalogError> {
        Ok(Self::new(InferenceEngine::graduation()?, ApiConfig::default()))
    }
}
