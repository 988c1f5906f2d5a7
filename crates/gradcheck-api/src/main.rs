//! # gradcheck-api: Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to `GRADCHECK_HOST:PORT`
//! (default `0.0.0.0:5001`). Set `LOG_FORMAT=json` for JSON log lines.

use anyhow::Context;
use gradcheck_api::config::ApiConfig;
use gradcheck_api::state::AppState;
use gradcheck_engine::InferenceEngine;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::from_env();
    let engine = InferenceEngine::graduation().context("invalid rule catalog")?;
    tracing::info!(
        rules = engine.rule_count(),
        questions = engine.catalog().questions().len(),
        "rule catalog loaded"
    );

    let addr = config.socket_addr();
    let app = gradcheck_api::app(AppState::new(engine, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("gradcheck API listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
