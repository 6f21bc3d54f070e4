//! LLM Client: the single point of entry for all text-completion calls.
//!
//! Talks to an OpenRouter-compatible chat completions endpoint. No other module
//! may call the completion API directly; scorers go through `call_json`.

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LlmSettings;

pub mod prompts;

const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.3;
const APP_TITLE: &str = "Job Matcher";
/// Backoff stops doubling after 1s, 2s, 4s, 8s, 16s, 32s.
const MAX_BACKOFF_EXPONENT: u32 = 5;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} attempts")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("No API key configured")]
    MissingApiKey,
}

impl LlmError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            LlmError::RateLimited { .. } | LlmError::Api { status: 429, .. }
        )
    }

    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(_) | LlmError::RateLimited { .. } => true,
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
    /// Some providers report failures inside a 200 response.
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    /// Number or numeric string depending on the upstream provider.
    pub code: Option<Value>,
}

impl ApiErrorBody {
    fn status_code(&self) -> Option<u16> {
        match self.code.as_ref()? {
            Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

impl LlmResponse {
    /// Extracts the generated text of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

/// The single LLM client used by all services.
/// Wraps the chat completions API with bounded retries and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    max_retries: u32,
    site_url: String,
}

impl LlmClient {
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmError> {
        let api_key = settings.api_key.clone().ok_or(LlmError::MissingApiKey)?;
        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client,
            api_key,
            api_url: settings.api_url.clone(),
            model: settings.model.clone(),
            max_retries: settings.max_retries.max(1),
            site_url: settings.site_url.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a raw chat completion call, returning the full response object.
    /// Retries on transport errors, 429 and 5xx with exponential backoff,
    /// up to `max_retries` attempts in total.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let mut attempts = 0;

        loop {
            let error = match self.send_once(&request_body).await {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };
            attempts += 1;

            if !error.is_retryable() || attempts >= self.max_retries {
                return Err(if error.is_rate_limited() {
                    LlmError::RateLimited { retries: attempts }
                } else {
                    error
                });
            }

            let delay = backoff_delay(attempts);
            warn!(
                "LLM call attempt {} failed ({}), retrying after {}ms...",
                attempts,
                error,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn send_once(&self, request_body: &ChatRequest<'_>) -> Result<LlmResponse, LlmError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.site_url)
            .header("X-Title", APP_TITLE)
            .json(request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("LLM API returned {}: {}", status, body);
            return Err(api_error_from_body(status.as_u16(), &body));
        }

        let llm_response: LlmResponse = serde_json::from_str(&body)?;

        if let Some(error) = &llm_response.error {
            let status = error.status_code().unwrap_or(status.as_u16());
            warn!("LLM API reported error {}: {}", status, error.message);
            return Err(LlmError::Api {
                status,
                message: error.message.clone(),
            });
        }

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(llm_response)
    }

    /// Convenience method that calls the LLM and deserializes the JSON object
    /// embedded in its text response. The prompt must ask for JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        let text = extract_json_object(strip_json_fences(text));

        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

/// Delay before retry number `attempt` (1-based): 1s, 2s, 4s, capped at 32s.
fn backoff_delay(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(MAX_BACKOFF_EXPONENT);
    Duration::from_millis(1000 << exponent)
}

/// Builds an API error from a non-success body, preferring the provider's
/// own `error.code` / `error.message` when present.
fn api_error_from_body(status: u16, body: &str) -> LlmError {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => LlmError::Api {
            status: envelope.error.status_code().unwrap_or(status),
            message: envelope.error.message,
        },
        Err(_) => LlmError::Api {
            status,
            message: body.to_string(),
        },
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Narrows text to the span from the first `{` to the last `}`.
/// Models often wrap the object in a sentence.
fn extract_json_object(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}
