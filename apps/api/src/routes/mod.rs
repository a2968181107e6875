pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as job_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/upload-resume",
            post(resume_handlers::handle_upload_resume),
        )
        .route(
            "/api/fetch-jobs",
            get(job_handlers::handle_fetch_jobs).post(job_handlers::handle_fetch_jobs),
        )
        .route("/api/matches", get(job_handlers::handle_list_matches))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::util::ServiceExt;

    use crate::config::Config;
    use crate::matching::matcher::Matcher;
    use crate::matching::profession::ProfessionClassifier;
    use crate::matching::skills::KeywordSkillExtractor;
    use crate::notify::Notifier;

    /// State with a lazy pool and no job sources; routes that stay off the
    /// database can be exercised without infrastructure.
    fn test_state() -> AppState {
        let config = Config {
            database_url: "postgres://localhost/unused".to_string(),
            anthropic_api_key: None,
            schedule_interval_minutes: 360,
            smtp: None,
            telegram: None,
            port: 0,
            rust_log: "info".to_string(),
        };
        let db = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .expect("lazy pool");
        let client = reqwest::Client::new();
        AppState {
            db,
            classifier: Arc::new(ProfessionClassifier::default()),
            extractor: Arc::new(KeywordSkillExtractor::default()),
            matcher: Arc::new(Matcher::default()),
            sources: Arc::new(Vec::new()),
            notifier: Arc::new(Notifier::new(&config, client)),
            config,
        }
    }

    #[tokio::test]
    async fn test_health_route_reports_pipeline() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["skill_extraction"], "keyword");
        assert_eq!(body["job_sources"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_upload_resume_rejects_empty_text() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload-resume")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_resume_rejects_malformed_body() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload-resume")
                    .header("content-type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_fetch_jobs_with_no_sources_returns_empty_matches() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/fetch-jobs")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"skills": ["python"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["matches"], serde_json::json!([]));
    }
}
