mod ai;
mod commands;
mod error;
mod intake;
mod models;
mod state;

use commands::*;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env file - try multiple locations
    // During `tauri dev`, CWD is project root; check current dir first
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_path("../.env");
    }

    // Initialize tracing with RUST_LOG env filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,ctf_analyzer_lib=info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .manage(AppState::default())
        .invoke_handler(tauri::generate_handler![
            // Credential commands
            set_api_key,
            has_api_key,
            delete_api_key,
            // File intake commands
            select_file,
            load_file,
            load_dropped_files,
            remove_file,
            // Analysis commands
            analyze_file,
            copy_result,
            // View state
            get_view_state,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
