//! Letter Generator — pluggable, trait-based backend that turns form data into letter HTML.
//!
//! Default: `LlmLetterGenerator` (chat completion via `llm_client`).
//! `AppState` holds an `Arc<dyn LetterGenerator>`, so handlers and tests can
//! swap in another backend without touching the endpoint.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{build_cover_letter_prompt, COVER_LETTER_SYSTEM};
use crate::generation::request::CoverLetterRequest;
use crate::llm_client::{strip_code_fences, ChatOptions, LlmClient};

const GENERATION_OPTIONS: ChatOptions = ChatOptions {
    temperature: 0.7,
    max_tokens: 2000,
};

#[async_trait]
pub trait LetterGenerator: Send + Sync {
    /// Writes one letter. `request` has already passed validation.
    async fn generate(&self, request: &CoverLetterRequest) -> Result<String, AppError>;
}

pub struct LlmLetterGenerator {
    llm: LlmClient,
}

impl LlmLetterGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }
}

#[async_trait]
impl LetterGenerator for LlmLetterGenerator {
    async fn generate(&self, request: &CoverLetterRequest) -> Result<String, AppError> {
        let prompt = build_cover_letter_prompt(request, Self::today());

        info!(
            "Generating cover letter for {} at {} (model: {})",
            request.job_title,
            request.company_name,
            self.llm.model()
        );

        let raw = self
            .llm
            .complete(COVER_LETTER_SYSTEM, &prompt, GENERATION_OPTIONS)
            .await?;

        Ok(strip_code_fences(&raw).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::DEFAULT_BASE_URL;
    use axum::{routing::post, Json, Router};
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_llm_generator_without_key_is_not_configured() {
        let llm = LlmClient::new(None, DEFAULT_BASE_URL, "test-model".to_string()).unwrap();
        let generator = LlmLetterGenerator::new(llm);
        let err = generator
            .generate(&CoverLetterRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::LlmNotConfigured));
    }

    #[tokio::test]
    async fn test_llm_generator_sends_generation_options_and_strips_fences() {
        let seen: Arc<Mutex<Option<serde_json::Value>>> = Arc::default();
        let captured = seen.clone();
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move |Json(body): Json<serde_json::Value>| {
                let captured = captured.clone();
                async move {
                    *captured.lock().unwrap() = Some(body);
                    Json(serde_json::json!({
                        "choices": [{"message": {"content": "```html\n<p>Dear Ada,</p>\n```"}}]
                    }))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let llm = LlmClient::new(
            Some("test-key".to_string()),
            &format!("http://{addr}/v1"),
            "test-model".to_string(),
        )
        .unwrap();
        let request = CoverLetterRequest {
            company_name: "Acme".to_string(),
            job_title: "Engineer".to_string(),
            ..Default::default()
        };
        let html = LlmLetterGenerator::new(llm).generate(&request).await.unwrap();
        assert_eq!(html, "<p>Dear Ada,</p>");

        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(body["temperature"].as_f64(), Some(0.7));
        assert_eq!(body["max_tokens"], 2000);
        assert_eq!(body["messages"][0]["content"], COVER_LETTER_SYSTEM);
        assert!(body["messages"][1]["content"]
            .as_str()
            .unwrap()
            .contains("Engineer"));
    }
}
