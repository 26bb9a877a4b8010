//! Ranking — scores a batch of jobs for one user and orders them for display.
//!
//! Reuses `matching::scorer` for every job so the list, the card badge and the
//! saved-jobs counter all agree.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::MatchScorer;
use crate::matching::tier::{is_high_match, MatchTier};
use crate::models::job::Job;

/// A job annotated with its match result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    pub job: Job,
    pub score: u32,
    pub tier: MatchTier,
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankSummary {
    pub total_jobs: usize, // after query filter, before limit
    pub high_match_count: usize,
    pub average_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJobs {
    pub jobs: Vec<RankedJob>,
    pub summary: RankSummary,
    pub scorer_backend: String,
}

#[derive(Debug, Clone, Default)]
pub struct RankOptions {
    pub query: Option<String>,
    /// 0 = unlimited
    pub limit: usize,
}

/// Filter → score → stable sort descending → truncate.
pub fn rank_jobs(
    scorer: &dyn MatchScorer,
    user_skills: &[String],
    jobs: Vec<Job>,
    options: &RankOptions,
) -> RankedJobs {
    let query = options.query.as_deref().unwrap_or("");

    let mut ranked: Vec<RankedJob> = jobs
        .into_iter()
        .filter(|job| job.matches_query(query))
        .map(|job| {
            let breakdown = scorer.score(user_skills, job.required_skills(), job.match_score);
            RankedJob {
                tier: MatchTier::from_score(breakdown.score),
                score: breakdown.score,
                matched_skills: breakdown.matched_skills,
                job,
            }
        })
        .collect();

    // sort_by is stable: ties keep input order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let summary = summarize(&ranked);

    if options.limit > 0 {
        ranked.truncate(options.limit);
    }

    RankedJobs {
        jobs: ranked,
        summary,
        scorer_backend: scorer.backend().to_string(),
    }
}

fn summarize(ranked: &[RankedJob]) -> RankSummary {
    let total_jobs = ranked.len();
    let high_match_count = ranked.iter().filter(|r| is_high_match(r.score)).count();

    let average_score = if total_jobs > 0 {
        let sum: u64 = ranked.iter().map(|r| u64::from(r.score)).sum();
        ((sum as f64) / (total_jobs as f64)).round() as u32
    } else {
        0
    };

    RankSummary {
        total_jobs,
        high_match_count,
        average_score,
    }
}
