//! Local Preferences
//!
//! JSON file in the app data dir holding the persisted session and the
//! last board selection. The selection expires after 30 days so a stale
//! pointer at a long-deleted pipeline does not survive forever.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, User};

/// Selections older than this are dropped on read
const SELECTION_MAX_AGE_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSelection {
    pub project_id: Option<u32>,
    pub pipeline_id: Option<u32>,
    /// Unix millis of the last write
    pub saved_at: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub selection: Option<StoredSelection>,
}

/// File-backed preference store
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files count as empty prefs
    pub fn load(&self) -> Prefs {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Prefs::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    pub fn save(&self, prefs: &Prefs) -> DomainResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DomainError::Internal(format!("create prefs dir: {}", e)))?;
        }
        let raw = serde_json::to_string_pretty(prefs)
            .map_err(|e| DomainError::Internal(format!("encode prefs: {}", e)))?;
        std::fs::write(&self.path, raw)
            .map_err(|e| DomainError::Internal(format!("write prefs: {}", e)))
    }

    pub fn session(&self) -> Option<Session> {
        self.load().session
    }

    pub fn save_session(&self, session: Session) -> DomainResult<()> {
        let mut prefs = self.load();
        prefs.session = Some(session);
        self.save(&prefs)
    }

    pub fn clear_session(&self) -> DomainResult<()> {
        let mut prefs = self.load();
        prefs.session = None;
        self.save(&prefs)
    }

    /// Last selection, unless it has gone stale
    pub fn selection(&self) -> Option<StoredSelection> {
        let selection = self.load().selection?;
        let age_ms = chrono::Utc::now().timestamp_millis() - selection.saved_at;
        if age_ms > SELECTION_MAX_AGE_DAYS * 24 * 60 * 60 * 1000 {
            return None;
        }
        Some(selection)
    }

    pub fn save_selection(&self, project_id: Option<u32>, pipeline_id: Option<u32>) -> DomainResult<()> {
        let mut prefs = self.load();
        prefs.selection = Some(StoredSelection {
            project_id,
            pipeline_id,
            saved_at: chrono::Utc::now().timestamp_millis(),
        });
        self.save(&prefs)
    }

    pub fn clear_selection(&self) -> DomainResult<()> {
        let mut prefs = self.load();
        prefs.selection = None;
        self.save(&prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> PrefsStore {
        PrefsStore::new(dir.path().join("prefs.json"))
    }

    fn user() -> User {
        User {
            id: 1,
            email: "a@b.c".to_string(),
            name: "A".to_string(),
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.session().is_none());
        assert!(store.selection().is_none());
    }

    #[test]
    fn test_session_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save_session(Session { token: "tok".to_string(), user: user() }).unwrap();
        let loaded = store.session().unwrap();
        assert_eq!(loaded.token, "tok");
        assert_eq!(loaded.user.email, "a@b.c");

        store.clear_session().unwrap();
        assert!(store.session().is_none());
    }

    #[test]
    fn test_selection_survives_session_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save_session(Session { token: "tok".to_string(), user: user() }).unwrap();
        store.save_selection(Some(3), Some(7)).unwrap();
        store.clear_session().unwrap();

        let selection = store.selection().unwrap();
        assert_eq!(selection.project_id, Some(3));
        assert_eq!(selection.pipeline_id, Some(7));
    }

    #[test]
    fn test_stale_selection_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let stale = Prefs {
            session: None,
            selection: Some(StoredSelection {
                project_id: Some(1),
                pipeline_id: Some(2),
                saved_at: chrono::Utc::now().timestamp_millis()
                    - (SELECTION_MAX_AGE_DAYS + 1) * 24 * 60 * 60 * 1000,
            }),
        };
        store.save(&stale).unwrap();

        assert!(store.selection().is_none());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "not json{").unwrap();
        assert!(store.session().is_none());
    }
}
