//! View-state Tauri command
//!
//! The webview is a passive renderer: after every state-changing command it
//! asks for this snapshot and toggles regions accordingly.

use crate::ai::CredentialStore;
use crate::models::FileSummary;
use crate::state::{visible_regions, AppState, Phase, VisibleRegions};
use serde::Serialize;
use tauri::State;

/// Full snapshot for the webview
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub phase: Phase,
    pub has_credential: bool,
    pub regions: VisibleRegions,
    pub file: Option<FileSummary>,
    pub result: Option<String>,
}

#[tauri::command]
pub fn get_view_state(state: State<'_, AppState>) -> ViewState {
    let has_credential = CredentialStore::is_configured();
    let phase = state.phase();
    ViewState {
        phase,
        has_credential,
        regions: visible_regions(has_credential, phase),
        file: state.file_summary(),
        result: state.current_result(),
    }
}
