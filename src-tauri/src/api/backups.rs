//! Backup Endpoints (server-side Yandex Disk integration)

use crate::domain::{BackupSettingsRequest, BackupStatus, DomainResult, YandexAuthUrlResponse};
use super::client::ApiClient;

impl ApiClient {
    pub async fn backup_status(&self) -> DomainResult<BackupStatus> {
        self.get("/yandex/backup/status").await
    }

    /// OAuth URL the user opens in the system browser
    pub async fn backup_auth_url(&self) -> DomainResult<String> {
        let response: YandexAuthUrlResponse = self.get("/yandex/auth-url").await?;
        Ok(response.auth_url)
    }

    pub async fn update_backup_settings(&self, enabled: bool, interval_minutes: u32) -> DomainResult<()> {
        let body = BackupSettingsRequest { enabled, interval_minutes };
        self.put_unit("/yandex/backup/settings", &body).await
    }

    pub async fn create_backup(&self) -> DomainResult<()> {
        self.post_empty("/yandex/backup/create").await
    }

    pub async fn disconnect_backup(&self) -> DomainResult<()> {
        self.delete("/yandex/disconnect").await
    }
}
