mod config;
mod db;
mod errors;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod notify;
mod pipeline;
mod resume;
mod routes;
mod scheduler;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_db};
use crate::jobs::{ArbeitnowSource, JobSource, RemoteOkSource};
use crate::llm_client::LlmClient;
use crate::matching::matcher::Matcher;
use crate::matching::profession::ProfessionClassifier;
use crate::matching::skills::{KeywordSkillExtractor, LlmSkillExtractor, SkillExtractor};
use crate::notify::Notifier;
use crate::routes::build_router;
use crate::state::AppState;

/// Per-request bound for upstream job boards and notification delivery.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobscope API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;
    init_db(&pool).await?;

    // Shared client for upstream boards and telegram delivery
    let http = reqwest::Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;

    // Skill extraction: inference-backed when a key is configured,
    // keyword scan otherwise
    let extractor: Arc<dyn SkillExtractor> = match &config.anthropic_api_key {
        Some(key) => {
            info!("skill extraction: inference (model: {})", llm_client::MODEL);
            Arc::new(LlmSkillExtractor::new(
                LlmClient::new(key.clone()),
                KeywordSkillExtractor::default(),
            ))
        }
        None => {
            info!("skill extraction: keyword fallback (no inference key set)");
            Arc::new(KeywordSkillExtractor::default())
        }
    };

    let sources: Vec<Box<dyn JobSource>> = vec![
        Box::new(RemoteOkSource::new(http.clone())),
        Box::new(ArbeitnowSource::new(http.clone())),
    ];

    let state = AppState {
        db: pool,
        classifier: Arc::new(ProfessionClassifier::default()),
        extractor,
        matcher: Arc::new(Matcher::default()),
        sources: Arc::new(sources),
        notifier: Arc::new(Notifier::new(&config, http)),
        config: config.clone(),
    };

    scheduler::spawn(state.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
