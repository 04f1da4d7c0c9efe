//! Credential Tauri commands
//!
//! The key is stored as-is; validity is only discovered when the remote API
//! rejects a later analysis call.

use crate::ai::CredentialStore;

/// Store the API key, overwriting any previous one
#[tauri::command]
pub fn set_api_key(api_key: String) -> Result<(), String> {
    CredentialStore::set(&api_key).map_err(String::from)
}

/// Whether a non-empty key is configured
#[tauri::command]
pub fn has_api_key() -> bool {
    CredentialStore::is_configured()
}

/// Manual reset: remove the stored key
#[tauri::command]
pub fn delete_api_key() -> Result<(), String> {
    CredentialStore::delete().map_err(String::from)
}
