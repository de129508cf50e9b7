//! Claude (Anthropic) LLM provider.

use super::{LlmError, LlmProvider};
use crate::config::DEFAULT_BASE_URL;
use crate::prompts::DEFAULT_MAX_TOKENS;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude API provider.
#[derive(Debug)]
pub struct ClaudeProvider {
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: u32,
    client: reqwest::Client,
}

impl ClaudeProvider {
    /// Create a new ClaudeProvider with the given API key and model.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            client: reqwest::Client::new(),
        }
    }

    /// Point the provider at a different API host.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

/// Claude API request format.
#[derive(Debug, Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ClaudeMessage>,
}

#[derive(Debug, Serialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

/// Claude API response format.
#[derive(Debug, Deserialize)]
struct ClaudeResponse {
    content: Vec<ClaudeContent>,
}

#[derive(Debug, Deserialize)]
struct ClaudeContent {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClaudeApiError {
    message: String,
}

/// Error response from Claude API.
#[derive(Debug, Deserialize)]
struct ClaudeErrorResponse {
    error: ClaudeApiError,
}

#[async_trait]
impl LlmProvider for ClaudeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ClaudeRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        tracing::debug!(model = %self.model, max_tokens = self.max_tokens, "Calling Claude API");

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(LlmError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        if status != 200 {
            if let Ok(error_response) = serde_json::from_str::<ClaudeErrorResponse>(&body) {
                return Err(LlmError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(LlmError::ApiError {
                status,
                message: body,
            });
        }

        let response: ClaudeResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::ParseError(e.to_string()))?;

        // First text block wins
        response
            .content
            .into_iter()
            .find_map(|c| {
                if c.content_type == "text" {
                    c.text
                } else {
                    None
                }
            })
            .ok_or_else(|| LlmError::ParseError("No text content in response".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "claude"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn provider(base_url: &str) -> ClaudeProvider {
        ClaudeProvider::new("sk-test".to_string(), "claude-test".to_string())
            .with_base_url(base_url)
            .with_max_tokens(1000)
    }

    #[tokio::test]
    async fn test_complete_returns_first_text_block() {
        let router = Router::new().route(
            "/v1/messages",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers["x-api-key"], "sk-test");
                assert_eq!(headers["anthropic-version"], ANTHROPIC_VERSION);
                assert_eq!(body["model"], "claude-test");
                assert_eq!(body["max_tokens"], 1000);
                assert_eq!(body["messages"][0]["role"], "user");
                Json(json!({
                    "content": [
                        {"type": "tool_use", "id": "x"},
                        {"type": "text", "text": "Chicken fried rice"}
                    ]
                }))
            }),
        );
        let base_url = spawn_stub(router).await;

        let text = provider(&base_url).complete("rice").await.unwrap();
        assert_eq!(text, "Chicken fried rice");
    }

    #[tokio::test]
    async fn test_complete_maps_api_error() {
        let router = Router::new().route(
            "/v1/messages",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": {"type": "invalid_request_error", "message": "bad model"}})),
                )
            }),
        );
        let base_url = spawn_stub(router).await;

        let err = provider(&base_url).complete("rice").await.unwrap_err();
        match err {
            LlmError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "bad model");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_maps_rate_limit() {
        let router = Router::new().route(
            "/v1/messages",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, [("retry-after", "7")], "slow down") }),
        );
        let base_url = spawn_stub(router).await;

        let err = provider(&base_url).complete("rice").await.unwrap_err();
        assert!(matches!(
            err,
            LlmError::RateLimited {
                retry_after_secs: Some(7)
            }
        ));
    }

    #[tokio::test]
    async fn test_complete_without_text_block() {
        let router = Router::new().route(
            "/v1/messages",
            post(|| async { Json(json!({"content": []})) }),
        );
        let base_url = spawn_stub(router).await;

        let err = provider(&base_url).complete("rice").await.unwrap_err();
        assert!(matches!(err, LlmError::ParseError(_)));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let p = provider("http://localhost:9999/");
        assert_eq!(p.messages_url(), "http://localhost:9999/v1/messages");
    }
}
