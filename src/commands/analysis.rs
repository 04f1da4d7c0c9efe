//! Analysis and clipboard Tauri commands

use crate::ai::{analyze, CredentialStore, OpenAiClient};
use crate::error::AppError;
use crate::state::AppState;
use tauri::State;
use tauri_plugin_clipboard_manager::ClipboardExt;

/// Run one analysis of the currently loaded file.
///
/// Fails fast (no network) when no key is configured or no file is loaded.
/// The in-flight flag is cleared however the call settles; on failure the
/// file stays loaded and no result is stored.
#[tauri::command]
pub async fn analyze_file(state: State<'_, AppState>) -> Result<String, String> {
    let credential = CredentialStore::get();
    let file = state.current_file();

    let _guard = state.begin_analysis();
    let client = OpenAiClient::new();
    let text = analyze(&client, credential.as_deref(), file.as_ref())
        .await
        .map_err(String::from)?;

    state.set_result(text.clone());
    Ok(text)
}

/// Copy the currently displayed result text verbatim to the system clipboard
#[tauri::command]
pub fn copy_result(app: tauri::AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    let text = state
        .current_result()
        .ok_or_else(|| AppError::ClipboardFailure("no result to copy".to_string()))
        .map_err(String::from)?;

    app.clipboard()
        .write_text(text)
        .map_err(|e| String::from(AppError::ClipboardFailure(e.to_string())))
}
