use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Status object with the service version and the configured match
/// pipeline: upstream job sources and the active skill extraction tier.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let sources: Vec<&str> = state.sources.iter().map(|s| s.name()).collect();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobscope-api",
        "job_sources": sources,
        "skill_extraction": if state.config.anthropic_api_key.is_some() {
            "inference"
        } else {
            "keyword"
        },
    }))
}
