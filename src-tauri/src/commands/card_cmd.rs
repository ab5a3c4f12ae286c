//! Tauri Commands for Card CRUD, Moves and Bulk Sort

use tauri::State;
use crate::domain::{
    validate_name, Card, CreateCardRequest, MoveCardRequest, SortEntry, UpdateCardRequest,
};
use crate::AppState;

/// All cards of a pipeline in one request
#[tauri::command]
pub async fn list_pipeline_cards(
    state: State<'_, AppState>,
    project_id: u32,
    pipeline_id: u32,
) -> Result<Vec<Card>, String> {
    state.api.list_pipeline_cards(project_id, pipeline_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_card(
    state: State<'_, AppState>,
    project_id: u32,
    pipeline_id: u32,
    status_id: u32,
    title: String,
    description: Option<String>,
    sort_order: i32,
) -> Result<Card, String> {
    validate_name(&title).map_err(|e| e.to_string())?;
    let body = CreateCardRequest {
        title: &title,
        description: description.as_deref(),
        sort_order: Some(sort_order),
    };
    state
        .api
        .create_card(project_id, pipeline_id, status_id, &body)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_card(
    state: State<'_, AppState>,
    project_id: u32,
    id: u32,
    title: Option<String>,
    description: Option<String>,
    sort_order: Option<i32>,
) -> Result<Card, String> {
    if let Some(title) = &title {
        validate_name(title).map_err(|e| e.to_string())?;
    }
    let body = UpdateCardRequest {
        title: title.as_deref(),
        description: description.as_deref(),
        sort_order,
    };
    state.api.update_card(project_id, id, &body).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_card(state: State<'_, AppState>, project_id: u32, id: u32) -> Result<(), String> {
    state.api.delete_card(project_id, id).await.map_err(|e| e.to_string())
}

/// Move a card into a status at a position
#[tauri::command]
pub async fn move_card(
    state: State<'_, AppState>,
    project_id: u32,
    id: u32,
    status_id: u32,
    sort_order: i32,
) -> Result<(), String> {
    let body = MoveCardRequest { status_id, sort_order: Some(sort_order) };
    state.api.move_card(project_id, id, &body).await.map_err(|e| e.to_string())
}

/// Persist whole columns' card order in one request
#[tauri::command]
pub async fn bulk_sort_cards(
    state: State<'_, AppState>,
    project_id: u32,
    entries: Vec<SortEntry>,
) -> Result<(), String> {
    state.api.bulk_sort_cards(project_id, entries).await.map_err(|e| e.to_string())
}
