//! # gradcheck-api: HTTP Service for Graduation Requirement Evaluation
//!
//! Thin transport over [`gradcheck_engine::InferenceEngine`]. A browser
//! questionnaire posts the collected facts and gets back the list of unmet
//! requirements.
//!
//! ## API Surface
//!
//! | Route                  | Module                  | Purpose                    |
//! |------------------------|-------------------------|----------------------------|
//! | `POST /api/evaluate`   | [`routes::evaluate`]    | Evaluate a fact set        |
//! | `GET /api/questions`   | [`routes::catalog`]     | Questionnaire              |
//! | `GET /api/rules`       | [`routes::catalog`]     | Rule metadata              |
//! | `GET /openapi.json`    | [`openapi`]             | OpenAPI document           |
//! | `GET /health/*`        | this module             | Liveness and readiness     |
//!
//! ## Middleware Stack (outermost first)
//!
//! ```text
//! TraceLayer → CorsLayer → CatchPanicLayer → Handler
//! ```
//!
//! A panicking handler becomes a generic 500 (`success: false`); the
//! process keeps serving.

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::middleware::{cors, tracing_layer};
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let cors = cors::layer(&state.config.cors_origins);

    let api = Router::new()
        .merge(routes::evaluate::router())
        .merge(routes::catalog::router())
        .merge(openapi::router())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors)
        .layer(tracing_layer::layer())
}

/// Liveness probe. Always 200 while the process runs.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The catalog is validated before the router exists, so
/// serving at all means ready.
async fn readiness() -> &'static str {
    "ready"
}
