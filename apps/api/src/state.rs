use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: SubstringMatchScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
}
