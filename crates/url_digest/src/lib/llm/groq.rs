use reqwest::Client;
use serde::Deserialize;

use crate::llm::{
    model::Model,
    summarizer::{Summarizer, SummaryRequest, SummaryResponse},
};

/// Client for Groq's OpenAI compatible chat completions API.
///
/// The API key travels with each request since every user brings their own.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GroqError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in completion response")]
    EmptyCompletion,
}

impl Default for GroqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GroqClient {
    pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: Self::DEFAULT_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    #[tracing::instrument(skip(self, api_key, user_content))]
    pub async fn send_completion_request(
        &self,
        api_key: &str,
        model: Model,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, GroqError> {
        let body = serde_json::json!({
            "model": model.as_str(),
            "messages": [
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "Completion request rejected");
            return Err(GroqError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Summarizer for GroqClient {
    type Error = GroqError;

    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<SummaryResponse, Self::Error> {
        let response = self
            .send_completion_request(request.api_key, request.model, request.prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(GroqError::EmptyCompletion)?;

        Ok(SummaryResponse { summary })
    }
}
