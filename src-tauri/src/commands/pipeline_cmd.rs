//! Tauri Commands for Pipeline CRUD + Bulk Sort

use tauri::State;
use crate::domain::{
    validate_name, CreatePipelineRequest, Pipeline, SortEntry, UpdatePipelineRequest,
};
use crate::AppState;

#[tauri::command]
pub async fn list_pipelines(state: State<'_, AppState>, project_id: u32) -> Result<Vec<Pipeline>, String> {
    state.api.list_pipelines(project_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_pipeline(
    state: State<'_, AppState>,
    project_id: u32,
    name: String,
    color: String,
    sort_order: Option<i32>,
) -> Result<Pipeline, String> {
    validate_name(&name).map_err(|e| e.to_string())?;
    let body = CreatePipelineRequest { name: &name, color: &color, sort_order };
    state.api.create_pipeline(project_id, &body).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_pipeline(
    state: State<'_, AppState>,
    project_id: u32,
    id: u32,
    name: Option<String>,
    color: Option<String>,
    sort_order: Option<i32>,
) -> Result<Pipeline, String> {
    if let Some(name) = &name {
        validate_name(name).map_err(|e| e.to_string())?;
    }
    let body = UpdatePipelineRequest { name: name.as_deref(), color: color.as_deref(), sort_order };
    state.api.update_pipeline(project_id, id, &body).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_pipeline(state: State<'_, AppState>, project_id: u32, id: u32) -> Result<(), String> {
    state.api.delete_pipeline(project_id, id).await.map_err(|e| e.to_string())
}

/// Persist a whole project's pipeline order in one request
#[tauri::command]
pub async fn bulk_sort_pipelines(
    state: State<'_, AppState>,
    project_id: u32,
    entries: Vec<SortEntry>,
) -> Result<(), String> {
    state.api.bulk_sort_pipelines(project_id, entries).await.map_err(|e| e.to_string())
}
