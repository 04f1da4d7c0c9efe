//! Application state
//!
//! One [`AppState`] instance is managed by Tauri and mutated only from
//! command handlers, replacing the ambient module globals of a typical
//! renderer. The presentation layer is a pure function from the lifecycle
//! phase to the set of visible regions, so it can be unit-tested without a
//! live webview.

use crate::models::{FileRecord, FileSummary};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Singleton backend state, managed via `tauri::Builder::manage`
#[derive(Default)]
pub struct AppState {
    file: Mutex<Option<FileRecord>>,
    result: Mutex<Option<String>>,
    analyzing: AtomicBool,
}

/// Intake/result lifecycle
///
/// `Empty → FileLoaded → Analyzing → ResultShown`; analysis failure falls
/// back to `FileLoaded`, removal collapses everything to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Empty,
    FileLoaded,
    Analyzing,
    ResultShown,
}

impl AppState {
    /// Install a freshly loaded file, replacing any previous record and
    /// discarding any stale result in the same step.
    pub fn set_file(&self, record: FileRecord) -> FileSummary {
        let summary = FileSummary::from(&record);
        {
            let mut file = self.file.lock().expect("file lock poisoned");
            let mut result = self.result.lock().expect("result lock poisoned");
            *file = Some(record);
            *result = None;
        }
        summary
    }

    /// Clear the loaded file and any result. No-op when already empty.
    pub fn remove_file(&self) {
        let mut file = self.file.lock().expect("file lock poisoned");
        let mut result = self.result.lock().expect("result lock poisoned");
        *file = None;
        *result = None;
    }

    /// Clone of the current record, if any
    pub fn current_file(&self) -> Option<FileRecord> {
        self.file.lock().expect("file lock poisoned").clone()
    }

    pub fn file_summary(&self) -> Option<FileSummary> {
        self.file
            .lock()
            .expect("file lock poisoned")
            .as_ref()
            .map(FileSummary::from)
    }

    pub fn set_result(&self, text: String) {
        *self.result.lock().expect("result lock poisoned") = Some(text);
    }

    pub fn current_result(&self) -> Option<String> {
        self.result.lock().expect("result lock poisoned").clone()
    }

    /// Mark an analysis call as outstanding. The returned guard clears the
    /// flag when dropped, so it resets no matter how the call settles.
    pub fn begin_analysis(&self) -> AnalysisGuard<'_> {
        self.analyzing.store(true, Ordering::SeqCst);
        AnalysisGuard { state: self }
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing.load(Ordering::SeqCst)
    }

    pub fn phase(&self) -> Phase {
        if self.is_analyzing() {
            return Phase::Analyzing;
        }
        let has_file = self.file.lock().expect("file lock poisoned").is_some();
        let has_result = self.result.lock().expect("result lock poisoned").is_some();
        match (has_file, has_result) {
            (true, true) => Phase::ResultShown,
            (true, false) => Phase::FileLoaded,
            // A result cannot outlive its file; removal clears both.
            (false, _) => Phase::Empty,
        }
    }
}

/// RAII guard for the in-flight analysis flag
pub struct AnalysisGuard<'a> {
    state: &'a AppState,
}

impl Drop for AnalysisGuard<'_> {
    fn drop(&mut self) {
        self.state.analyzing.store(false, Ordering::SeqCst);
    }
}

/// Which regions of the interface are shown for a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleRegions {
    pub setup_prompt: bool,
    pub upload_area: bool,
    pub file_info: bool,
    pub analyze_trigger: bool,
    /// Whether the trigger accepts clicks (false while a call is outstanding)
    pub analyze_enabled: bool,
    pub loading_indicator: bool,
    pub result_panel: bool,
}

/// Pure view-state function: phase + credential presence in, regions out.
pub fn visible_regions(has_credential: bool, phase: Phase) -> VisibleRegions {
    VisibleRegions {
        setup_prompt: !has_credential,
        upload_area: phase == Phase::Empty,
        file_info: phase != Phase::Empty,
        analyze_trigger: phase != Phase::Empty,
        analyze_enabled: phase != Phase::Analyzing,
        loading_indicator: phase == Phase::Analyzing,
        result_panel: phase == Phase::ResultShown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> AppState {
        let state = AppState::default();
        state.set_file(FileRecord::new("notes.txt", "hello".to_string()));
        state
    }

    #[test]
    fn test_initial_phase_is_empty() {
        assert_eq!(AppState::default().phase(), Phase::Empty);
    }

    #[test]
    fn test_load_then_result_walks_the_lifecycle() {
        let state = loaded_state();
        assert_eq!(state.phase(), Phase::FileLoaded);

        {
            let _guard = state.begin_analysis();
            assert_eq!(state.phase(), Phase::Analyzing);
        }
        // Guard dropped without a result: back to FileLoaded (failure path)
        assert_eq!(state.phase(), Phase::FileLoaded);

        state.set_result("FLAG{test}".to_string());
        assert_eq!(state.phase(), Phase::ResultShown);
    }

    #[test]
    fn test_remove_file_is_idempotent() {
        let state = AppState::default();
        state.remove_file();
        state.remove_file();
        assert_eq!(state.phase(), Phase::Empty);
        assert!(state.current_file().is_none());
        assert!(state.current_result().is_none());
    }

    #[test]
    fn test_removal_collapses_result_shown_to_empty() {
        let state = loaded_state();
        state.set_result("FLAG{test}".to_string());
        state.remove_file();
        assert_eq!(state.phase(), Phase::Empty);
    }

    #[test]
    fn test_new_file_discards_stale_result() {
        let state = loaded_state();
        state.set_result("FLAG{old}".to_string());
        state.set_file(FileRecord::new("other.txt", "bye".to_string()));
        assert_eq!(state.phase(), Phase::FileLoaded);
        assert!(state.current_result().is_none());
    }

    #[test]
    fn test_guard_resets_flag_on_panic_unwind() {
        let state = loaded_state();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = state.begin_analysis();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!state.is_analyzing());
    }

    #[test]
    fn test_visible_regions_per_phase() {
        let empty = visible_regions(true, Phase::Empty);
        assert!(empty.upload_area && !empty.file_info && !empty.result_panel);

        let loaded = visible_regions(true, Phase::FileLoaded);
        assert!(!loaded.upload_area && loaded.file_info && loaded.analyze_trigger);
        assert!(loaded.analyze_enabled && !loaded.loading_indicator);

        let analyzing = visible_regions(true, Phase::Analyzing);
        assert!(analyzing.loading_indicator && !analyzing.analyze_enabled);
        assert!(!analyzing.result_panel);

        let shown = visible_regions(true, Phase::ResultShown);
        assert!(shown.result_panel && shown.file_info);
    }

    #[test]
    fn test_setup_prompt_tracks_credential_presence() {
        assert!(visible_regions(false, Phase::Empty).setup_prompt);
        assert!(!visible_regions(true, Phase::Empty).setup_prompt);
        // Missing credential still prompts even with a file loaded
        assert!(visible_regions(false, Phase::FileLoaded).setup_prompt);
    }
}
