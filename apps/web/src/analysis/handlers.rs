//! Axum route handler for the analysis form.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::{header::ACCEPT, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyze_cv;
use crate::errors::AppError;
use crate::extract::ExtractError;
use crate::models::document::{DocumentFormat, UploadedDocument};
use crate::routes::pages::{ErrorPage, ResultPage};
use crate::state::AppState;

pub const CV_FIELD: &str = "cv";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: String,
}

/// Raw multipart fields, before validation.
#[derive(Debug, Default)]
pub struct AnalyzeSubmission {
    pub cv: Option<(String, Bytes)>,
    pub job_description: Option<String>,
}

impl AnalyzeSubmission {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut submission = AnalyzeSubmission::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                CV_FIELD => {
                    let file_name = field.file_name().unwrap_or("").to_string();
                    let data = field.bytes().await?;
                    submission.cv = Some((file_name, data));
                }
                JOB_DESCRIPTION_FIELD => {
                    submission.job_description = Some(field.text().await?);
                }
                _ => {
                    // Drain unknown fields so the stream can advance.
                    field.bytes().await?;
                }
            }
        }

        Ok(submission)
    }

    /// Checks the submission in the order users hit problems: file first, then the text.
    pub fn validate(self) -> Result<(UploadedDocument, String), AppError> {
        let (file_name, bytes) = self
            .cv
            .ok_or_else(|| AppError::Validation("No CV file uploaded".to_string()))?;

        if file_name.trim().is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }

        let format = DocumentFormat::from_file_name(&file_name)
            .ok_or_else(|| ExtractError::UnsupportedFormat(file_name.clone()))?;

        let job_description = self.job_description.unwrap_or_default();
        if job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "Job description is required".to_string(),
            ));
        }

        Ok((UploadedDocument::new(file_name, format, bytes), job_description))
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// POST /analyze
///
/// Accepts a multipart upload (`cv` file + `job_description` text), runs the
/// analysis and returns the model's answer as JSON (when the client asks for
/// it) or as an HTML page. Errors follow the same split.
#[tracing::instrument(name = "analyze", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let json = wants_json(&headers);
    match run_analysis(&state, multipart, json).await {
        Ok(response) => Ok(response),
        Err(e) if json => Err(e),
        Err(e) => {
            let (status, _, message) = e.parts();
            let page = ErrorPage::new(&message).render()?;
            Ok((status, Html(page)).into_response())
        }
    }
}

async fn run_analysis(
    state: &AppState,
    multipart: Multipart,
    json: bool,
) -> Result<Response, AppError> {
    let (document, job_description) = AnalyzeSubmission::from_multipart(multipart)
        .await?
        .validate()?;

    let file_name = document.file_name.clone();
    info!(
        file_name = %file_name,
        format = %document.format,
        mime = document.format.mime_type(),
        bytes = document.len(),
        "Received CV for analysis"
    );

    let analysis = analyze_cv(
        state.extractor.clone(),
        state.model.as_ref(),
        document,
        &job_description,
    )
    .await?;

    if json {
        return Ok(Json(AnalyzeResponse {
            success: true,
            analysis,
        })
        .into_response());
    }

    let page = ResultPage::new(&file_name, &analysis).render()?;
    Ok(Html(page).into_response())
}
