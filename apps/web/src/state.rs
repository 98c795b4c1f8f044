use std::sync::Arc;

use crate::config::Config;
use crate::extract::TextExtractor;
use crate::llm_client::AnalysisModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable handles; nothing is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text extractor. Default: DocumentExtractor (pdf-extract + DOCX XML reader).
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable model backend. Default: GeminiClient.
    pub model: Arc<dyn AnalysisModel>,
    pub config: Config,
}
