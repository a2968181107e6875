//! Persisted match records and their queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::warn;
use uuid::Uuid;

use crate::matching::matcher::MatchResult;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchRecordRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub url: Option<String>,
    pub matched_skills: Vec<String>,
    pub raw: Value,
    pub created_at: DateTime<Utc>,
}

pub async fn insert_match(pool: &PgPool, result: &MatchResult) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO matches (id, title, company, url, matched_skills, raw) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(Uuid::new_v4())
    .bind(&result.title)
    .bind(&result.company)
    .bind(&result.url)
    .bind(&result.matched_skills)
    .bind(&result.raw)
    .execute(pool)
    .await?;
    Ok(())
}

/// Inserts each match, logging and skipping rows that fail. A partial
/// write never fails the surrounding request.
pub async fn persist_matches(pool: &PgPool, matches: &[MatchResult]) {
    for result in matches {
        if let Err(e) = insert_match(pool, result).await {
            warn!("failed to persist match '{}': {e}", result.title);
        }
    }
}

pub async fn list_matches(pool: &PgPool, limit: i64) -> Result<Vec<MatchRecordRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM matches ORDER BY created_at DESC LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .await
}
