//! Application error types
//!
//! Every fallible operation funnels into [`AppError`]; Tauri commands convert
//! it to a `String` at the boundary so the webview can interpolate the
//! message into a user-facing alert.

use thiserror::Error;

/// Unified application error
#[derive(Debug, Error)]
pub enum AppError {
    /// No API key has been configured yet
    #[error("Please configure your API key first")]
    MissingConfiguration,

    /// No file has been selected for analysis
    #[error("Please select a file first")]
    MissingInput,

    /// The chosen file could not be read or decoded
    #[error("Unable to read file: {0}")]
    ReadFailure(String),

    /// The chat-completion API call failed (network, auth, rate limit, or a
    /// response we could not make sense of)
    #[error("Error during analysis: {0}")]
    RemoteCallFailure(String),

    /// The system clipboard rejected the copy
    #[error("Unable to copy: {0}")]
    ClipboardFailure(String),

    /// Credential persistence failed (keychain write/delete)
    #[error("Unable to store API key: {0}")]
    StorageFailure(String),
}

impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}
