pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match/score", post(handlers::handle_score))
        .route("/api/v1/match/rank", post(handlers::handle_rank))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::matching::scorer::SubstringMatchScorer;

    fn test_router() -> Router {
        router_with(Config::default())
    }

    fn router_with(config: Config) -> Router {
        build_router(AppState {
            config,
            match_scorer: Arc::new(SubstringMatchScorer),
        })
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        post_json_to(test_router(), uri, body).await
    }

    async fn post_json_to(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_score_endpoint_half_match() {
        let (status, body) = post_json(
            "/api/v1/match/score",
            json!({"user_skills": ["React", "Python"], "job_skills": ["react", "django"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 50);
        assert_eq!(body["tier"], "low");
        assert_eq!(body["matched_skills"], json!(["react"]));
        assert_eq!(body["missing_skills"], json!(["django"]));
        assert_eq!(body["scorer_backend"], "substring");
    }

    #[tokio::test]
    async fn test_score_endpoint_substring_full_match() {
        let (_, body) = post_json(
            "/api/v1/match/score",
            json!({"user_skills": ["JavaScript"], "job_skills": ["Java", "JavaScript", "Script"]}),
        )
        .await;
        assert_eq!(body["score"], 100);
        assert_eq!(body["tier"], "strong");
    }

    #[tokio::test]
    async fn test_score_endpoint_precomputed_zero_wins() {
        let (_, body) = post_json(
            "/api/v1/match/score",
            json!({"user_skills": ["rust"], "job_skills": ["rust"], "precomputed": 0}),
        )
        .await;
        assert_eq!(body["score"], 0);
    }

    #[tokio::test]
    async fn test_score_endpoint_missing_lists_default_empty() {
        let (status, body) = post_json("/api/v1/match/score", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
    }

    #[tokio::test]
    async fn test_rank_endpoint_orders_and_applies_default_limit() {
        let jobs: Vec<Value> = (0..8)
            .map(|i| json!({"job_id": format!("job-{i}"), "title": "Engineer", "tags": ["rust", format!("skill-{i}")]}))
            .chain(std::iter::once(
                json!({"job_id": "best", "title": "Rust Engineer", "tags": ["rust"]}),
            ))
            .collect();

        let (status, body) = post_json(
            "/api/v1/match/rank",
            json!({"user": {"skills": ["Rust"]}, "jobs": jobs}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let ranked = body["jobs"].as_array().unwrap();
        assert_eq!(ranked.len(), 6);
        assert_eq!(ranked[0]["job"]["job_id"], "best");
        assert_eq!(ranked[0]["score"], 100);
        assert_eq!(ranked[1]["score"], 50);
        assert_eq!(body["summary"]["total_jobs"], 9);
        assert_eq!(body["summary"]["high_match_count"], 1);
    }

    #[tokio::test]
    async fn test_rank_endpoint_keeps_backend_score() {
        let (_, body) = post_json(
            "/api/v1/match/rank",
            json!({
                "user": {"skills": ["go"]},
                "jobs": [{"job_id": "1", "tags": ["cobol"], "match_score": 72}],
                "limit": 0
            }),
        )
        .await;
        assert_eq!(body["jobs"][0]["score"], 72);
        assert_eq!(body["jobs"][0]["tier"], "good");
    }

    #[tokio::test]
    async fn test_rank_endpoint_rejects_limit_above_max() {
        let (status, body) = post_json(
            "/api/v1/match/rank",
            json!({"user": {"skills": []}, "jobs": [], "limit": 1000}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rank_endpoint_accepts_backend_job_with_every_id_key() {
        let (status, body) = post_json(
            "/api/v1/match/rank",
            json!({
                "user": {"skills": ["Rust"]},
                "jobs": [{
                    "_id": "665f1c2ab8e4a1d2c3b4a5f6",
                    "id": "665f1c2ab8e4a1d2c3b4a5f6",
                    "job_id": "118204",
                    "title": "Senior Rust Engineer",
                    "company_name": "Ferris Labs",
                    "location": null,
                    "remote": null,
                    "date_posted": "2024-06-04T10:12:00Z",
                    "raw": {"id": 118204, "employment_type": null},
                    "matched_skills": ["rust"],
                    "match_reason": "Matches 1 of your skills"
                }]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"][0]["job"]["job_id"], "118204");
        assert_eq!(body["jobs"][0]["score"], 100);
    }

    #[tokio::test]
    async fn test_rank_endpoint_zero_limit_capped_at_max() {
        let config = Config {
            rank_max_limit: 3,
            ..Config::default()
        };
        let jobs: Vec<Value> = (0..5)
            .map(|i| json!({"job_id": format!("job-{i}"), "tags": ["rust"]}))
            .collect();

        let (status, body) = post_json_to(
            router_with(config),
            "/api/v1/match/rank",
            json!({"user": {"skills": ["rust"]}, "jobs": jobs, "limit": 0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"].as_array().unwrap().len(), 3);
        assert_eq!(body["summary"]["total_jobs"], 5);
    }
}
