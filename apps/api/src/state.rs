use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::matching::scoring::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
    pub config: Config,
    /// Pluggable match scorer. Default: SkillOverlapScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
}
