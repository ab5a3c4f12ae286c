//! Tauri Commands for Cloud Backups

use tauri::State;
use crate::domain::BackupStatus;
use crate::AppState;

#[tauri::command]
pub async fn backup_status(state: State<'_, AppState>) -> Result<BackupStatus, String> {
    state.api.backup_status().await.map_err(|e| e.to_string())
}

/// OAuth URL the user completes in the system browser
#[tauri::command]
pub async fn backup_auth_url(state: State<'_, AppState>) -> Result<String, String> {
    state.api.backup_auth_url().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_backup_settings(
    state: State<'_, AppState>,
    enabled: bool,
    interval_minutes: u32,
) -> Result<(), String> {
    state
        .api
        .update_backup_settings(enabled, interval_minutes)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_backup(state: State<'_, AppState>) -> Result<(), String> {
    tracing::info!("manual backup requested");
    state.api.create_backup().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn disconnect_backup(state: State<'_, AppState>) -> Result<(), String> {
    state.api.disconnect_backup().await.map_err(|e| e.to_string())
}

/// Open a URL in the system browser
#[tauri::command]
pub async fn open_external(url: String) -> Result<(), String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(format!("refusing to open non-http URL: {}", url));
    }
    open::that(&url).map_err(|e| e.to_string())
}
