mod config;
mod cv;
mod db;
mod errors;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::jobs::source::{JobSource, PgJobSource};
use crate::llm_client::LlmClient;
use crate::matching::engine::MatchEngine;
use crate::matching::heuristic::HeuristicScorer;
use crate::matching::remote::LlmMatchScorer;
use crate::matching::scorer::{FallbackScorer, MatchScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL-backed job source
    let db = create_pool(&config).await?;
    let jobs: Arc<dyn JobSource> = Arc::new(PgJobSource::new(db));

    // Initialize scorer: remote-first with heuristic fallback, or heuristic only without a key
    let scorer = build_scorer(&config)?;

    let engine = MatchEngine::new(Arc::clone(&jobs), scorer, config.match_limit);
    info!("Match engine ready (top {} matches per request)", config.match_limit);

    let state = AppState { jobs, engine };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to SITE_URL once the frontend is deployed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_scorer(config: &Config) -> Result<Arc<dyn MatchScorer>> {
    if config.llm.api_key.is_none() {
        warn!("OPENROUTER_API_KEY not set; all matches will use heuristic scoring");
        return Ok(Arc::new(HeuristicScorer));
    }

    let llm = LlmClient::new(&config.llm)?;
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm.model(),
        config.llm.timeout
    );

    let remote = LlmMatchScorer::new(llm, config.llm.timeout);
    Ok(Arc::new(FallbackScorer::new(Arc::new(remote))))
}
