//! Frontend Models
//!
//! Data structures mirrored from the remote API records (via backend).

use serde::{Deserialize, Serialize};

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub name: String,
}

/// Project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub user_id: u32,
    pub created_at: String,
    pub updated_at: String,
}

/// Pipeline (kanban board) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub project_id: u32,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Status (column) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub pipeline_id: u32,
    pub sort_order: i32,
    #[serde(default)]
    pub is_collapsed: Option<bool>,
    pub created_at: String,
    pub updated_at: String,
}

/// Card (task) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub status_id: u32,
    pub user_id: u32,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Cloud backup status (server-side Yandex Disk integration)
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

/// One card search hit with context names and a match fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSearchResult {
    pub id: u32,
    pub title: String,
    pub status_id: u32,
    pub status_name: String,
    pub pipeline_id: u32,
    pub pipeline_name: String,
    pub project_id: u32,
    pub project_name: String,
    #[serde(default)]
    pub match_field: Option<String>,
    #[serde(default)]
    pub match_fragment: Option<String>,
}

/// Paged search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSearchPage {
    #[serde(default)]
    pub cards: Vec<CardSearchResult>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Last selected project/pipeline restored from prefs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BoardSelection {
    pub project_id: Option<u32>,
    pub pipeline_id: Option<u32>,
}
