//! Static HTML pages. Templates live in `templates/` and are compiled into the binary.

use askama::Template;
use axum::response::Html;

use crate::errors::AppError;
use crate::routes::MAX_UPLOAD_BYTES;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Template)]
#[template(path = "index.html")]
pub struct LandingPage<'a> {
    pub version: &'a str,
}

#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadPage<'a> {
    pub version: &'a str,
    pub max_upload_mb: usize,
}

/// Result page for plain (non-script) form posts. `analysis` is HTML-escaped on render.
#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultPage<'a> {
    pub version: &'a str,
    pub file_name: &'a str,
    pub analysis: &'a str,
}

impl<'a> ResultPage<'a> {
    pub fn new(file_name: &'a str, analysis: &'a str) -> Self {
        Self {
            version: VERSION,
            file_name,
            analysis,
        }
    }
}

/// Error page for plain form posts; script clients get the JSON error body instead.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub version: &'a str,
    pub message: &'a str,
}

impl<'a> ErrorPage<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            version: VERSION,
            message,
        }
    }
}

/// GET /
pub async fn landing_page() -> Result<Html<String>, AppError> {
    Ok(Html(LandingPage { version: VERSION }.render()?))
}

/// GET /upload
pub async fn upload_page() -> Result<Html<String>, AppError> {
    let page = UploadPage {
        version: VERSION,
        max_upload_mb: MAX_UPLOAD_BYTES / (1024 * 1024),
    };
    Ok(Html(page.render()?))
}
