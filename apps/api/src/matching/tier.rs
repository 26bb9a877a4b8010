use serde::{Deserialize, Serialize};

/// Badge bucket shown next to a job's match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Good,
    Low,
}

impl MatchTier {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            MatchTier::Strong
        } else if score >= 60 {
            MatchTier::Good
        } else {
            MatchTier::Low
        }
    }
}

/// Saved-jobs "high match" counter threshold. Strictly above 80, unlike the Strong badge.
pub fn is_high_match(score: u32) -> bool {
    score > 80
}
