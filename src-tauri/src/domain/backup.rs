//! Backup Types
//!
//! Server-side Yandex Disk backup: status, schedule settings and the
//! OAuth URL used to connect an account.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupStatus {
    pub is_configured: bool,
    pub is_enabled: bool,
    #[serde(default)]
    pub last_backup: String,
    #[serde(default)]
    pub next_backup: String,
    #[serde(default)]
    pub backup_count: u32,
    #[serde(default)]
    pub interval_minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct BackupSettingsRequest {
    pub enabled: bool,
    pub interval_minutes: u32,
}

#[derive(Debug, Deserialize)]
pub struct YandexAuthUrlResponse {
    pub auth_url: String,
}
