//! File intake Tauri commands
//!
//! - select_file: native picker, `null` when cancelled
//! - load_file: read + decode a path into the single FileRecord
//! - load_dropped_files: drag-and-drop entry point (first item only)
//! - remove_file: clear the record and any result

use crate::intake;
use crate::models::FileSummary;
use crate::state::AppState;
use tauri::State;
use tauri_plugin_dialog::DialogExt;

/// Open the native file picker. Async so the blocking dialog call stays off
/// the main thread.
#[tauri::command]
pub async fn select_file(app: tauri::AppHandle) -> Result<Option<String>, String> {
    match app.dialog().file().blocking_pick_file() {
        Some(path) => {
            let path = path.into_path().map_err(|e| e.to_string())?;
            Ok(Some(path.to_string_lossy().into_owned()))
        }
        None => Ok(None),
    }
}

/// Load a file into the application state. On failure the previously loaded
/// file (if any) is left untouched.
#[tauri::command]
pub async fn load_file(path: String, state: State<'_, AppState>) -> Result<FileSummary, String> {
    let record = intake::load_file(&path).await.map_err(String::from)?;
    tracing::info!(name = %record.name, size = record.size, "file loaded");
    Ok(state.set_file(record))
}

/// Handle a drop of one or more items: only the first is loaded, the rest
/// are ignored silently. An empty drop is a no-op.
#[tauri::command]
pub async fn load_dropped_files(
    paths: Vec<String>,
    state: State<'_, AppState>,
) -> Result<Option<FileSummary>, String> {
    let Some(first) = paths.into_iter().next() else {
        return Ok(None);
    };
    let record = intake::load_file(&first).await.map_err(String::from)?;
    Ok(Some(state.set_file(record)))
}

/// Clear the loaded file. Idempotent.
#[tauri::command]
pub fn remove_file(state: State<'_, AppState>) {
    state.remove_file();
}
