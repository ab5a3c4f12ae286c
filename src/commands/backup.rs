//! Backup Commands
//!
//! Frontend bindings for the server-side cloud backup (Yandex Disk).

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::BackupStatus;
use super::invoke;

#[derive(Serialize)]
struct BackupSettingsArgs {
    enabled: bool,
    #[serde(rename = "intervalMinutes")]
    interval_minutes: u32,
}

#[derive(Serialize)]
struct OpenExternalArgs<'a> {
    url: &'a str,
}

pub async fn backup_status() -> Result<BackupStatus, String> {
    let result = invoke("backup_status", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// OAuth URL the user completes in the system browser
pub async fn backup_auth_url() -> Result<String, String> {
    let result = invoke("backup_auth_url", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_backup_settings(enabled: bool, interval_minutes: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&BackupSettingsArgs { enabled, interval_minutes })
        .map_err(|e| e.to_string())?;
    invoke("update_backup_settings", js_args).await?;
    Ok(())
}

pub async fn create_backup() -> Result<(), String> {
    invoke("create_backup", JsValue::NULL).await?;
    Ok(())
}

pub async fn disconnect_backup() -> Result<(), String> {
    invoke("disconnect_backup", JsValue::NULL).await?;
    Ok(())
}

/// Open a URL in the system browser (used for the OAuth flow)
pub async fn open_external(url: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&OpenExternalArgs { url }).map_err(|e| e.to_string())?;
    invoke("open_external", js_args).await?;
    Ok(())
}
