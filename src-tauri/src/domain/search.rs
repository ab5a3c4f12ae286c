//! Card Search Types
//!
//! Full-text search over card titles and descriptions, paged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct CardSearchRequest<'a> {
    pub query: &'a str,
    pub page: u32,
    pub page_size: u32,
}

/// One hit with enough context to jump to the card's board
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
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
