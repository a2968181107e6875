use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::matcher::MatchResult;
use crate::matching::profession::Profession;
use crate::models::match_record::persist_matches;
use crate::pipeline;
use crate::resume::extract::extract_upload_text;
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Default, Deserialize)]
struct RawTextBody {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub profession: Profession,
    pub skills: Vec<String>,
    pub matches: Vec<MatchResult>,
}

/// POST /api/upload-resume
///
/// Accepts either a multipart upload with a `file` field (PDF or plain
/// text) or a JSON body `{"text": "..."}`. Runs one full match cycle and
/// responds with the detected profession, the extracted skills, and the
/// matched postings.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<UploadResponse>, AppError> {
    let text = read_resume_text(req).await?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text extracted from resume.".to_string(),
        ));
    }

    let skills = state.extractor.extract(&text).await;
    let outcome = pipeline::run_cycle(&state, skills, &text).await;
    persist_matches(&state.db, &outcome.matches).await;

    // Announce skill-bearing matches in the background; delivery failures
    // stay out of the response path.
    let notifier = state.notifier.clone();
    let announce: Vec<MatchResult> = outcome
        .matches
        .iter()
        .filter(|m| !m.matched_skills.is_empty())
        .cloned()
        .collect();
    tokio::spawn(async move {
        for result in &announce {
            notifier.announce(result).await;
        }
    });

    Ok(Json(UploadResponse {
        profession: outcome.profession,
        skills: outcome.skills,
        matches: outcome.matches,
    }))
}

/// Pulls resume text out of either request shape. The JSON shape is
/// lenient: a missing or malformed body is just empty text, which the
/// caller rejects with a validation error.
async fn read_resume_text(req: Request) -> Result<String, AppError> {
    let is_multipart = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("multipart/form-data"))
        .unwrap_or(false);

    if !is_multipart {
        let bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
            .await
            .unwrap_or_default();
        let body: RawTextBody = serde_json::from_slice(&bytes).unwrap_or_default();
        return Ok(body.text);
    }

    let mut multipart = Multipart::from_request(req, &())
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?;

    let mut text = String::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart field: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            text = extract_upload_text(&filename, &data);
        }
    }
    Ok(text)
}
