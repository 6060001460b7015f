use std::sync::Arc;

use crate::analysis::scoring::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable match scorer. Default: KeywordMatchScorer, chosen in main.
    pub scorer: Arc<dyn MatchScorer>,
}
