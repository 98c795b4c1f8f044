//! LLM Client: the single point of entry for all Gemini API calls.
//!
//! No other module talks to the Gemini API directly. Request handlers depend on
//! the `AnalysisModel` trait, so tests can swap in a stub model.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);
/// Upper bound on attempts, whatever GEMINI_MAX_RETRIES says.
pub const MAX_RETRIES_CAP: u32 = 10;
/// No single backoff sleep exceeds this.
const MAX_BACKOFF: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Prompt blocked by the model: {0}")]
    Blocked(String),
}

/// A text-generation backend. Carried in `AppState` as `Arc<dyn AnalysisModel>`.
#[async_trait]
pub trait AnalysisModel: Send + Sync {
    /// Sends a single prompt and returns the model's raw text answer.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Gemini `generateContent` client with retry logic.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_retries: u32,
    base_delay: Duration,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        Ok(Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_api_base.clone(),
            Duration::from_secs(config.gemini_timeout_secs),
        )?
        .with_retry_policy(config.gemini_max_retries, DEFAULT_BASE_DELAY))
    }

    /// Overrides the attempt budget and the first backoff delay (doubled per retry).
    pub fn with_retry_policy(mut self, max_retries: u32, base_delay: Duration) -> Self {
        self.max_retries = max_retries.clamp(1, MAX_RETRIES_CAP);
        self.base_delay = base_delay;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/{API_VERSION}/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Makes a raw call to `generateContent`, returning the full response object.
    /// Retries on transport errors, 429 and 5xx with exponential backoff.
    pub async fn call(&self, prompt: &str) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };
        let url = self.generate_url();

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(self.base_delay, attempt);
                warn!(
                    "Gemini call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header(API_KEY_HEADER, &self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
            }

            let body = response.text().await?;
            let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

            if let Some(usage) = &parsed.usage_metadata {
                debug!(
                    "Gemini call succeeded: prompt_tokens={}, output_tokens={}",
                    usage.prompt_token_count, usage.candidates_token_count
                );
            }

            return Ok(parsed);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: self.max_retries,
        }))
    }

    /// Lists the models visible to the configured key.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError> {
        let response = self
            .client
            .get(format!("{}/{API_VERSION}/models", self.base_url))
            .query(&[("pageSize", "1000")])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let parsed: ListModelsResponse = serde_json::from_str(&body)?;
        Ok(parsed.models)
    }
}

#[async_trait]
impl AnalysisModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        if let Some(reason) = response.block_reason() {
            return Err(LlmError::Blocked(reason.to_string()));
        }
        response.text().ok_or_else(|| {
            let finish_reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref())
                .unwrap_or("none");
            warn!("Gemini returned no text (finish_reason={finish_reason})");
            LlmError::EmptyContent
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Exponential backoff for retry `attempt` (1-based): base, 2x base, 4x base ...,
/// clamped to `MAX_BACKOFF`.
fn backoff_delay(base_delay: Duration, attempt: u32) -> Duration {
    let factor = 1u32
        .checked_shl(attempt.saturating_sub(1))
        .unwrap_or(u32::MAX);
    base_delay.saturating_mul(factor).min(MAX_BACKOFF)
}

/// Pulls `error.message` out of a Gemini error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    #[derive(Clone, Default)]
    struct StubState {
        hits: Arc<AtomicUsize>,
        requests: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
    }

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: String) -> GeminiClient {
        GeminiClient::new(
            "test-key".to_string(),
            DEFAULT_MODEL.to_string(),
            base_url,
            Duration::from_secs(5),
        )
        .unwrap()
        .with_retry_policy(3, Duration::from_millis(1))
    }

    fn answer(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 3}
        })
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_key() {
        let stub = StubState::default();
        let router = Router::new()
            .route(
                "/v1beta/models/:call",
                post(
                    |State(s): State<StubState>,
                     Path(call): Path<String>,
                     headers: HeaderMap,
                     Json(body): Json<Value>| async move {
                        let key = headers
                            .get("x-goog-api-key")
                            .and_then(|v| v.to_str().ok())
                            .map(String::from);
                        s.requests.lock().unwrap().push((call, key, body));
                        Json(answer("Strong match. OVERALL SCORE: 82"))
                    },
                ),
            )
            .with_state(stub.clone());
        let client = client_for(spawn_stub(router).await);

        let text = client.generate("CV: Jane. Job: Rust").await.unwrap();
        assert_eq!(text, "Strong match. OVERALL SCORE: 82");

        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (call, key, body) = &requests[0];
        assert_eq!(call, "gemini-1.5-flash:generateContent");
        assert_eq!(key.as_deref(), Some("test-key"));
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "CV: Jane. Job: Rust");
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried_and_message_is_parsed() {
        let stub = StubState::default();
        let router = Router::new()
            .route(
                "/v1beta/models/:call",
                post(|State(s): State<StubState>| async move {
                    s.hits.fetch_add(1, Ordering::SeqCst);
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"error": {
                            "code": 400,
                            "message": "API key not valid. Please pass a valid API key.",
                            "status": "INVALID_ARGUMENT"
                        }})),
                    )
                }),
            )
            .with_state(stub.clone());
        let client = client_for(spawn_stub(router).await);

        let err = client.generate("prompt").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid. Please pass a valid API key.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(stub.hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_errors_are_retried_until_success() {
        let stub = StubState::default();
        let router = Router::new()
            .route(
                "/v1beta/models/:call",
                post(|State(s): State<StubState>| async move {
                    let attempt = s.hits.fetch_add(1, Ordering::SeqCst);
                    if attempt < 2 {
                        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({})))
                    } else {
                        (StatusCode::OK, Json(answer("third time lucky")))
                    }
                }),
            )
            .with_state(stub.clone());
        let client = client_for(spawn_stub(router).await);

        assert_eq!(client.generate("prompt").await.unwrap(), "third time lucky");
        assert_eq!(stub.hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_quota_exhaustion_surfaces_after_retries() {
        let stub = StubState::default();
        let router = Router::new()
            .route(
                "/v1beta/models/:call",
                post(|State(s): State<StubState>| async move {
                    s.hits.fetch_add(1, Ordering::SeqCst);
                    (
                        StatusCode::TOO_MANY_REQUESTS,
                        Json(json!({"error": {"code": 429, "message": "Quota exceeded"}})),
                    )
                }),
            )
            .with_state(stub.clone());
        let client = client_for(spawn_stub(router).await);

        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 429, ref message } if message == "Quota exceeded"));
        assert_eq!(stub.hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_blocked_prompt_and_empty_candidates() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|Json(body): Json<Value>| async move {
                let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or("");
                if prompt == "blocked" {
                    Json(json!({"promptFeedback": {"blockReason": "SAFETY"}}))
                } else {
                    Json(json!({"candidates": []}))
                }
            }),
        );
        let client = client_for(spawn_stub(router).await);

        assert!(matches!(
            client.generate("blocked").await,
            Err(LlmError::Blocked(reason)) if reason == "SAFETY"
        ));
        assert!(matches!(
            client.generate("anything").await,
            Err(LlmError::EmptyContent)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_http_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}"));
        assert!(matches!(
            client.generate("prompt").await,
            Err(LlmError::Http(_))
        ));
    }

    #[tokio::test]
    async fn test_list_models() {
        let router = Router::new().route(
            "/v1beta/models",
            get(|| async {
                Json(json!({"models": [
                    {"name": "models/gemini-1.5-flash", "displayName": "Gemini 1.5 Flash",
                     "supportedGenerationMethods": ["generateContent", "countTokens"]},
                    {"name": "models/text-embedding-004",
                     "supportedGenerationMethods": ["embedContent"]}
                ]}))
            }),
        );
        let client = client_for(spawn_stub(router).await);

        let models = client.list_models().await.unwrap();
        let usable: Vec<_> = models
            .iter()
            .filter(|m| m.supports_generate_content())
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(models.len(), 2);
        assert_eq!(usable, vec!["models/gemini-1.5-flash"]);
    }

    #[test]
    fn test_backoff_doubles_and_is_clamped() {
        let base = Duration::from_secs(1);
        assert_eq!(backoff_delay(base, 1), Duration::from_secs(1));
        assert_eq!(backoff_delay(base, 2), Duration::from_secs(2));
        assert_eq!(backoff_delay(base, 3), Duration::from_secs(4));
        assert_eq!(backoff_delay(base, 7), MAX_BACKOFF);
        assert_eq!(backoff_delay(base, 33), MAX_BACKOFF);
        assert_eq!(backoff_delay(base, u32::MAX), MAX_BACKOFF);
    }

    #[test]
    fn test_retry_budget_is_capped() {
        let client = client_for("http://localhost:9".to_string())
            .with_retry_policy(40, Duration::from_secs(1));
        assert_eq!(client.max_retries, MAX_RETRIES_CAP);

        let client = client_for("http://localhost:9".to_string())
            .with_retry_policy(0, Duration::from_secs(1));
        assert_eq!(client.max_retries, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_large_retry_setting_fails_cleanly() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}"))
            .with_retry_policy(40, Duration::from_secs(1));
        assert!(matches!(
            client.generate("prompt").await,
            Err(LlmError::Http(_))
        ));
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "Fit: "}, {"text": "good"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Fit: good"));
    }

    #[test]
    fn test_api_error_message_falls_back_to_raw_body() {
        assert_eq!(api_error_message("upstream exploded".to_string()), "upstream exploded");
        assert_eq!(
            api_error_message(r#"{"error":{"code":403,"message":"denied"}}"#.to_string()),
            "denied"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = client_for("http://localhost:9/".to_string());
        assert_eq!(
            client.generate_url(),
            "http://localhost:9/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }
}
