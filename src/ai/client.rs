//! OpenAI chat-completion client
//!
//! Wire types for the chat-completions endpoint and the HTTP transport
//! behind the [`ChatBackend`] seam. One attempt per call; failures carry the
//! API's own message so the user sees what the provider said.

use crate::ai::http_client::openai_client;
use crate::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default API base URL
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Fixed model for CTF analysis
pub const ANALYSIS_MODEL: &str = "gpt-4";

/// Response length cap
pub const MAX_TOKENS: u32 = 2000;

/// Sampling temperature
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl ChatResponse {
    /// Text of the first candidate, or an error for an empty choice list
    pub fn into_text(self) -> Result<String, AppError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::RemoteCallFailure("no response from model".to_string()))
    }
}

/// Transport seam for the chat-completion call, so tests can substitute a
/// fake instead of the network.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String, AppError>;
}

/// Live HTTP transport against the OpenAI API
pub struct OpenAiClient {
    base_url: String,
}

impl OpenAiClient {
    pub fn new() -> Self {
        Self {
            base_url: OPENAI_API_BASE.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for OpenAiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatBackend for OpenAiClient {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String, AppError> {
        let resp = openai_client()
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::RemoteCallFailure(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::RemoteCallFailure(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| AppError::RemoteCallFailure(format!("Failed to parse response: {}", e)))?;

        parsed.into_text()
    }
}
