use std::sync::Arc;

use crate::analysis::skills::VocabularyStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is immutable configuration — each analysis
/// request derives its result fresh, nothing is carried between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Named skill vocabularies resolved per request by category key.
    pub vocabularies: Arc<VocabularyStore>,
}
