//! Analysis orchestrator
//!
//! Composes the fixed CTF prompt and the loaded file into exactly one
//! chat-completion request. Preconditions are checked before the transport
//! is touched, so a missing credential or file never reaches the network.

use crate::ai::client::{ChatBackend, ChatMessage, ChatRequest, ANALYSIS_MODEL, MAX_TOKENS, TEMPERATURE};
use crate::ai::prompts::{build_analysis_prompt, CTF_SYSTEM_PROMPT};
use crate::error::AppError;
use crate::models::FileRecord;

/// Run one analysis. Single attempt; no retry.
pub async fn analyze(
    backend: &dyn ChatBackend,
    credential: Option<&str>,
    file: Option<&FileRecord>,
) -> Result<String, AppError> {
    let api_key = credential
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(AppError::MissingConfiguration)?;
    let file = file.ok_or(AppError::MissingInput)?;

    let request = ChatRequest {
        model: ANALYSIS_MODEL.to_string(),
        messages: vec![
            ChatMessage::system(CTF_SYSTEM_PROMPT),
            ChatMessage::user(build_analysis_prompt(file)),
        ],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    };

    tracing::info!(file = %file.name, size = file.size, "issuing analysis request");
    backend.complete(api_key, &request).await
}
