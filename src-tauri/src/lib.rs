//! Nadder Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - api: reqwest client for the remote REST API
//! - prefs: local session and board-selection persistence
//! - commands: Tauri command handlers

use tauri::Manager;

mod domain;
mod api;
mod prefs;
mod commands;

use api::ApiClient;
use prefs::PrefsStore;

/// Application state shared across commands
pub struct AppState {
    pub api: ApiClient,
    pub prefs: PrefsStore,
}

/// Prefs file path under the app data dir
fn prefs_path(app_handle: &tauri::AppHandle) -> tauri::Result<std::path::PathBuf> {
    let app_dir = app_handle.path().app_data_dir()?;
    Ok(app_dir.join("prefs.json"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                #[cfg(desktop)]
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .init();

            let app_handle = app.handle().clone();
            let prefs = PrefsStore::new(prefs_path(&app_handle)?);
            let api = ApiClient::from_env();

            tracing::info!(prefs = %prefs.path().display(), "app setup");

            app.manage(AppState { api, prefs });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Auth + session
            commands::login,
            commands::register,
            commands::restore_session,
            commands::logout,
            commands::change_password,
            // Projects
            commands::list_projects,
            commands::create_project,
            commands::update_project,
            commands::delete_project,
            // Pipelines
            commands::list_pipelines,
            commands::create_pipeline,
            commands::update_pipeline,
            commands::delete_pipeline,
            commands::bulk_sort_pipelines,
            // Statuses
            commands::list_statuses,
            commands::create_status,
            commands::update_status,
            commands::delete_status,
            // Cards
            commands::list_pipeline_cards,
            commands::create_card,
            commands::update_card,
            commands::delete_card,
            commands::move_card,
            commands::bulk_sort_cards,
            // Backups
            commands::backup_status,
            commands::backup_auth_url,
            commands::update_backup_settings,
            commands::create_backup,
            commands::disconnect_backup,
            commands::open_external,
            // Search
            commands::search_cards,
            // Local prefs
            commands::load_board_selection,
            commands::save_board_selection,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
