//! AI integration: credential storage, chat-completion client, prompt
//! templates, and the analysis orchestrator.

pub mod analyzer;
pub mod client;
pub mod credentials;
pub mod http_client;
pub mod prompts;

pub use analyzer::analyze;
pub use client::{ChatBackend, OpenAiClient};
pub use credentials::CredentialStore;
