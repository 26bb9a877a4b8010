//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::errors::AppError;
use crate::matching::ranking::{rank_jobs, RankOptions, RankedJobs};
use crate::matching::tier::MatchTier;
use crate::models::job::Job;
use crate::models::user::UserSkills;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub user_skills: Vec<String>,
    #[serde(default)]
    pub job_skills: Vec<String>,
    #[serde(default)]
    pub precomputed: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u32,
    pub tier: MatchTier,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub scorer_backend: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub user: UserSkills,
    #[serde(default)]
    pub jobs: Vec<Job>,
    pub query: Option<String>,
    pub limit: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores one job's skill list against a user's skills.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let breakdown = state.match_scorer.score(
        &request.user_skills,
        &request.job_skills,
        request.precomputed,
    );

    debug!(
        score = breakdown.score,
        job_skills = request.job_skills.len(),
        precomputed = request.precomputed.is_some(),
        "scored job"
    );

    Ok(Json(ScoreResponse {
        score: breakdown.score,
        tier: MatchTier::from_score(breakdown.score),
        matched_skills: breakdown.matched_skills,
        missing_skills: breakdown.missing_skills,
        scorer_backend: state.match_scorer.backend().to_string(),
    }))
}

/// POST /api/v1/match/rank
///
/// Scores, filters and orders a batch of jobs for one user. `limit` falls back
/// to the configured default (the recommendation list size); 0 asks for as many
/// as allowed, which is `rank_max_limit`.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankedJobs>, AppError> {
    let limit = effective_limit(request.limit, &state.config)?;

    let options = RankOptions {
        query: request.query,
        limit,
    };
    let job_count = request.jobs.len();

    let ranked = rank_jobs(
        state.match_scorer.as_ref(),
        &request.user.skills,
        request.jobs,
        &options,
    );

    debug!(
        jobs_in = job_count,
        jobs_out = ranked.jobs.len(),
        high_matches = ranked.summary.high_match_count,
        "ranked jobs"
    );

    Ok(Json(ranked))
}

/// Resolves the requested limit against the configured default and maximum.
fn effective_limit(requested: Option<usize>, config: &Config) -> Result<usize, AppError> {
    let max = config.rank_max_limit;
    match requested.unwrap_or(config.rank_default_limit) {
        0 => Ok(max),
        n if n > max => Err(AppError::Validation(format!(
            "limit must be at most {max}"
        ))),
        n => Ok(n),
    }
}
