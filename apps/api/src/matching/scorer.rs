//! Skill Match Scorer — how much of a job's required-skill list a user covers.
//!
//! Default: `SubstringMatchScorer` (case-insensitive substring in either direction).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>` so every caller (job card, job list,
//! saved jobs, recommendations) gets the same number for the same inputs.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Score plus the job skills that did and did not match, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub score: u32, // 0 – 100 unless precomputed
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap backends without touching
/// handlers or the ranking code.
pub trait MatchScorer: Send + Sync {
    fn score(
        &self,
        user_skills: &[String],
        job_skills: &[String],
        precomputed: Option<u32>,
    ) -> MatchBreakdown;

    /// Label reported back to callers ("substring").
    fn backend(&self) -> &'static str;
}

/// Case-insensitive substring scorer.
pub struct SubstringMatchScorer;

impl MatchScorer for SubstringMatchScorer {
    fn score(
        &self,
        user_skills: &[String],
        job_skills: &[String],
        precomputed: Option<u32>,
    ) -> MatchBreakdown {
        match_breakdown(user_skills, job_skills, precomputed)
    }

    fn backend(&self) -> &'static str {
        "substring"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Returns the 0–100 match percentage of `job_skills` covered by `user_skills`.
///
/// A precomputed score (from the backend) is authoritative and returned as-is,
/// including `Some(0)`. Otherwise either list being empty scores 0, and each job
/// skill counts once if any user skill contains it or is contained by it
/// (case-insensitive). Empty strings are substrings of everything and so match.
pub fn compute_match(
    user_skills: &[String],
    job_skills: &[String],
    precomputed: Option<u32>,
) -> u32 {
    if let Some(score) = precomputed {
        return score;
    }
    if user_skills.is_empty() || job_skills.is_empty() {
        return 0;
    }

    let user_lower = lowercase_all(user_skills);
    let matched = job_skills
        .iter()
        .filter(|skill| skill_matches(&user_lower, skill))
        .count();

    percentage(matched, job_skills.len())
}

/// Same score as [`compute_match`], plus the matched / missing partition of `job_skills`.
pub fn match_breakdown(
    user_skills: &[String],
    job_skills: &[String],
    precomputed: Option<u32>,
) -> MatchBreakdown {
    let user_lower = lowercase_all(user_skills);

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job_skills
        .iter()
        .cloned()
        .partition(|skill| skill_matches(&user_lower, skill));

    let score = match precomputed {
        Some(score) => score,
        None if user_skills.is_empty() || job_skills.is_empty() => 0,
        None => percentage(matched_skills.len(), job_skills.len()),
    };

    MatchBreakdown {
        score,
        matched_skills,
        missing_skills,
    }
}

fn lowercase_all(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

fn skill_matches(user_lower: &[String], job_skill: &str) -> bool {
    let job_lower = job_skill.to_lowercase();
    user_lower
        .iter()
        .any(|u| u.contains(job_lower.as_str()) || job_lower.contains(u.as_str()))
}

/// round(matched / total * 100), halves away from zero, in exact integer math.
fn percentage(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let (matched, total) = (matched as u64, total as u64);
    ((200 * matched + total) / (2 * total)) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
