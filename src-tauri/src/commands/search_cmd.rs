//! Tauri Command for Card Search

use tauri::State;
use crate::domain::CardSearchPage;
use crate::AppState;

#[tauri::command]
pub async fn search_cards(
    state: State<'_, AppState>,
    query: String,
    page: u32,
    page_size: u32,
) -> Result<CardSearchPage, String> {
    state.api.search_cards(&query, page, page_size).await.map_err(|e| e.to_string())
}
