/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the Llama API directly.
/// All LLM interactions MUST go through this module.
///
/// Speaks the OpenAI-compatible `/chat/completions` protocol. The Llama API
/// answers with `completion_message.content.text`; OpenAI-style servers
/// (Ollama, LM Studio) answer with `choices[0].message.content`. Both are accepted.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub const DEFAULT_BASE_URL: &str = "https://api.llama.com/v1";
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const MAX_RETRIES: u32 = 3;
const BACKOFF_BASE_MS: u64 = 1000;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLAMA_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    pub fn is_rate_limit(&self) -> bool {
        match self {
            LlmError::RateLimited { .. } => true,
            LlmError::Api { status, message } => {
                *status == 429 || message.to_lowercase().contains("rate limit")
            }
            _ => false,
        }
    }

    /// Transport failures, 429 and 5xx are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(_) => true,
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        match self {
            LlmError::Api { status, message } => {
                *status == 401 || message.contains("Incorrect API key")
            }
            _ => false,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Sampling options for a single chat call.
#[derive(Debug, Clone, Copy)]
pub struct ChatOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub completion_message: Option<CompletionMessage>,
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<CompletionContent>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionContent {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Generated text, preferring the Llama shape over the OpenAI one.
    pub fn text(&self) -> Option<&str> {
        let llama = self
            .completion_message
            .as_ref()
            .and_then(|m| m.content.as_ref())
            .and_then(|c| c.text.as_deref());
        let openai = self
            .choices
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref());
        llama.or(openai).filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Wraps the chat-completions endpoint with retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, api_url: &str, model: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            endpoint: chat_completions_url(api_url),
            model,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.llama_api_key.clone(),
            &config.llama_api_url,
            config.llama_model.clone(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends a system + user message pair and returns the generated text.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn complete(
        &self,
        system: &str,
        prompt: &str,
        options: ChatOptions,
    ) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatRequest {
            model: &self.model,
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
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let mut attempt = 1;
        loop {
            let error = match self.send_once(api_key, &request_body).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt < MAX_RETRIES => e,
                Err(e) if e.is_retryable() && e.is_rate_limit() => {
                    return Err(LlmError::RateLimited { attempts: attempt })
                }
                Err(e) => return Err(e),
            };

            // Exponential backoff: 1s, 2s
            let delay = Duration::from_millis(BACKOFF_BASE_MS << (attempt - 1));
            warn!(
                "LLM call attempt {} failed ({}), retrying after {}ms...",
                attempt,
                error,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn send_once(&self, api_key: &str, body: &ChatRequest<'_>) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(text),
            });
        }

        let chat_response: ChatResponse = serde_json::from_str(&text)?;
        let content = chat_response.text().ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded: {} chars generated", content.len());

        Ok(content.to_string())
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Normalises a configured URL to the chat-completions endpoint. Accepts
/// either a base URL or one that already ends in `/chat/completions`.
pub fn chat_completions_url(configured: &str) -> String {
    let base = configured
        .strip_suffix("/chat/completions/")
        .or_else(|| configured.strip_suffix(CHAT_COMPLETIONS_PATH))
        .unwrap_or(configured);
    let base = if base.is_empty() { DEFAULT_BASE_URL } else { base };
    format!("{base}{CHAT_COMPLETIONS_PATH}")
}

/// Strips ```html ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag on the opening fence line
    let rest = rest
        .strip_prefix("html")
        .or_else(|| rest.strip_prefix("HTML"))
        .unwrap_or(rest)
        .trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}
