use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Scoring engine. Immutable, so shared without locks.
    pub analyzer: Arc<Analyzer>,
    /// Pluggable text extractor. Default: DefaultTextExtractor (pdf-extract + UTF-8).
    pub extractor: Arc<dyn TextExtractor>,
}
