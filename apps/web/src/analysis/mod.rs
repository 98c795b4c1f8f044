// CV analysis: upload validation, extraction, prompt building and the model call.
// All model calls go through the `AnalysisModel` trait; no direct HTTP here.

pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::extract::TextExtractor;
use crate::llm_client::AnalysisModel;
use crate::models::document::UploadedDocument;

use self::prompts::build_analysis_prompt;

/// Runs the whole pipeline for one request: extract, build the prompt, ask the model.
/// Returns the model's answer unmodified.
pub async fn analyze_cv(
    extractor: Arc<dyn TextExtractor>,
    model: &dyn AnalysisModel,
    document: UploadedDocument,
    job_description: &str,
) -> Result<String, AppError> {
    let cv_text = extract_blocking(extractor, document).await?;
    info!(chars = cv_text.chars().count(), "Extracted CV text");

    let prompt = build_analysis_prompt(&cv_text, job_description);
    info!(model = model.model_name(), prompt_chars = prompt.len(), "Requesting analysis");

    let analysis = model.generate(&prompt).await?;
    info!(chars = analysis.len(), "Analysis received");
    Ok(analysis)
}

/// Extraction is CPU-bound; keep it off the async worker threads.
async fn extract_blocking(
    extractor: Arc<dyn TextExtractor>,
    document: UploadedDocument,
) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || extractor.extract(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("extraction task failed")))??;
    Ok(text)
}
