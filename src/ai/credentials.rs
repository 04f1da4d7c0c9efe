//! Credential storage
//!
//! The single OpenAI API key lives in the OS keychain, scoped to the app
//! identifier. Debug builds fall back to a base64-obfuscated file under the
//! user config directory when no keychain is available (headless dev boxes).
//! The key is never validated locally; a bad key surfaces as a rejected
//! analysis call.

use crate::error::AppError;
use keyring::Entry;
#[cfg(debug_assertions)]
use std::path::{Path, PathBuf};

const SERVICE_NAME: &str = "com.ctf-analyzer.app";
const KEY_NAME: &str = "openai_api_key";

/// Keychain-backed store for the one API credential
pub struct CredentialStore;

impl CredentialStore {
    /// Retrieve the stored API key, or `None` if none has been set
    pub fn get() -> Option<String> {
        if let Ok(entry) = Entry::new(SERVICE_NAME, KEY_NAME) {
            if let Ok(key) = entry.get_password() {
                return Some(key);
            }
        }

        #[cfg(debug_assertions)]
        if let Some(path) = fallback_path() {
            if let Ok(key) = read_fallback(&path) {
                tracing::debug!("using dev-mode credential file at {:?}", path);
                return Some(key);
            }
        }

        None
    }

    /// Persist the API key, overwriting any previous value
    pub fn set(api_key: &str) -> Result<(), AppError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AppError::StorageFailure(
                "API key must not be empty".to_string(),
            ));
        }

        match Entry::new(SERVICE_NAME, KEY_NAME) {
            Ok(entry) => {
                if entry.set_password(api_key).is_ok() {
                    return Ok(());
                }
            }
            Err(e) => {
                tracing::warn!("keychain unavailable: {}", e);
            }
        }

        #[cfg(debug_assertions)]
        if let Some(path) = fallback_path() {
            write_fallback(&path, api_key)?;
            tracing::debug!("stored dev-mode credential file at {:?}", path);
            return Ok(());
        }

        Err(AppError::StorageFailure(
            "secure credential storage unavailable".to_string(),
        ))
    }

    /// Remove the stored key (manual reset)
    pub fn delete() -> Result<(), AppError> {
        if let Ok(entry) = Entry::new(SERVICE_NAME, KEY_NAME) {
            let _ = entry.delete_credential();
        }

        #[cfg(debug_assertions)]
        if let Some(path) = fallback_path() {
            if path.exists() {
                std::fs::remove_file(&path)
                    .map_err(|e| AppError::StorageFailure(e.to_string()))?;
            }
        }

        Ok(())
    }

    pub fn is_configured() -> bool {
        Self::get().is_some_and(|key| !key.trim().is_empty())
    }
}

#[cfg(debug_assertions)]
fn fallback_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ctf-analyzer").join("api_key"))
}

#[cfg(debug_assertions)]
fn write_fallback(path: &Path, api_key: &str) -> Result<(), AppError> {
    use base64::Engine;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AppError::StorageFailure(e.to_string()))?;
    }
    let encoded = base64::engine::general_purpose::STANDARD.encode(api_key);
    std::fs::write(path, encoded).map_err(|e| AppError::StorageFailure(e.to_string()))
}

#[cfg(debug_assertions)]
fn read_fallback(path: &Path) -> Result<String, AppError> {
    use base64::Engine;

    let encoded =
        std::fs::read_to_string(path).map_err(|e| AppError::StorageFailure(e.to_string()))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| AppError::StorageFailure(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::StorageFailure(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key");
        write_fallback(&path, "sk-test-12345").unwrap();
        // On-disk form is obfuscated
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("sk-test-12345"));
        assert_eq!(read_fallback(&path).unwrap(), "sk-test-12345");
    }

    #[test]
    fn test_fallback_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_fallback(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = CredentialStore::set("   ").unwrap_err();
        assert!(matches!(err, AppError::StorageFailure(_)));
    }
}
