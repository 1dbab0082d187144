//! OpenAIApiClient - Direct REST API implementation for OpenAI chat completions.
//!
//! Configuration priority: ~/.config/parent-helpers/secret.json > environment variables

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};

use parent_helpers_core::HelperError;
use parent_helpers_core::completion::{CompletionRequest, CompletionService, PromptMessage};
use parent_helpers_core::config::{DEFAULT_OPENAI_MODEL, OpenAIConfig};
use parent_helpers_core::error::Result;
use parent_helpers_infrastructure::storage::SecretStorage;

const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Completion service backed by the OpenAI HTTP API.
///
/// A client may be built without an API key so the wizard can start; every
/// request then fails with `HelperError::Config`.
#[derive(Clone)]
pub struct OpenAIApiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl OpenAIApiClient {
    /// Creates a client with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: Some(api_key.into()).filter(|key: &String| !key.trim().is_empty()),
            model: model.into(),
        }
    }

    /// Creates a client that reports missing credentials on every call.
    pub fn without_key(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: None,
            model: model.into(),
        }
    }

    /// Builds a client from secret.json, falling back to environment variables.
    ///
    /// Priority:
    /// 1. ~/.config/parent-helpers/secret.json
    /// 2. Environment variables (OPENAI_API_KEY, OPENAI_MODEL_NAME)
    ///
    /// Never fails: without a key the client is created in the keyless state.
    pub fn from_environment() -> Self {
        match SecretStorage::new().and_then(|storage| storage.load()) {
            Ok(secret) => {
                if let Some(openai) = secret.openai.filter(OpenAIConfig::has_key) {
                    tracing::debug!("[OpenAI] Using credentials from secret.json");
                    return Self::new(openai.api_key.clone(), openai.model());
                }
            }
            Err(e) => tracing::debug!("[OpenAI] secret.json unavailable: {}", e),
        }

        let model = env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.into());
        match env::var("OPENAI_API_KEY") {
            Ok(api_key) => Self::new(api_key, model),
            Err(_) => {
                tracing::warn!(
                    "[OpenAI] OPENAI_API_KEY not found in secret.json or environment variables"
                );
                Self::without_key(model)
            }
        }
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_request(&self, request: CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: request.messages,
            response_format: request.json_reply.then(|| ResponseFormat {
                r#type: "json_object".to_string(),
            }),
        }
    }

    async fn send_request(&self, api_key: &str, body: &ChatCompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| HelperError::service(format!("OpenAI API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            HelperError::service(format!("Failed to parse OpenAI response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionService for OpenAIApiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(HelperError::config(
                "OPENAI_API_KEY not found in secret.json or environment variables",
            ));
        };

        let body = self.build_request(request);
        tracing::info!(
            "[OpenAI] Sending {} message(s) to {}",
            body.messages.len(),
            body.model
        );
        self.send_request(api_key, &body).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<PromptMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    r#type: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| HelperError::service("OpenAI API returned no content in the response"))
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> HelperError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    let mut text = format!("HTTP {}: {}", status.as_u16(), message);
    if is_retryable {
        text.push_str(" (retryable");
        if let Some(delay) = retry_after {
            text.push_str(&format!(", retry after {}s", delay.as_secs()));
        }
        text.push(')');
    }
    HelperError::service(text)
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    // HTTP-date form is not handled
    value.parse::<u64>().ok().map(Duration::from_secs)
}
