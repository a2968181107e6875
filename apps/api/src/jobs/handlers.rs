use axum::extract::{Query, Request, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::matcher::MatchResult;
use crate::models::match_record::{list_matches, persist_matches, MatchRecordRow};
use crate::pipeline;
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Default, Deserialize)]
pub struct FetchJobsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Serialize)]
pub struct FetchJobsResponse {
    pub matches: Vec<MatchResult>,
}

/// POST|GET /api/fetch-jobs
///
/// The body is optional; a missing or malformed JSON body is treated as
/// an empty skill list. With no resume text the profession resolves to
/// `general`, so results come from the relaxation rule.
pub async fn handle_fetch_jobs(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<FetchJobsResponse>, AppError> {
    let bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .unwrap_or_default();
    let body: FetchJobsRequest = serde_json::from_slice(&bytes).unwrap_or_default();

    let outcome = pipeline::run_cycle(&state, body.skills, "").await;
    persist_matches(&state.db, &outcome.matches).await;

    Ok(Json(FetchJobsResponse {
        matches: outcome.matches,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ListMatchesQuery {
    pub limit: Option<i64>,
}

/// GET /api/matches
pub async fn handle_list_matches(
    State(state): State<AppState>,
    Query(query): Query<ListMatchesQuery>,
) -> Result<Json<Vec<MatchRecordRow>>, AppError> {
    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    let rows = list_matches(&state.db, limit).await?;
    Ok(Json(rows))
}
