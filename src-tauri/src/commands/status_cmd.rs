//! Tauri Commands for Status CRUD

use tauri::State;
use crate::domain::{validate_name, CreateStatusRequest, Status, UpdateStatusRequest};
use crate::AppState;

#[tauri::command]
pub async fn list_statuses(
    state: State<'_, AppState>,
    project_id: u32,
    pipeline_id: u32,
) -> Result<Vec<Status>, String> {
    state.api.list_statuses(project_id, pipeline_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_status(
    state: State<'_, AppState>,
    project_id: u32,
    pipeline_id: u32,
    name: String,
    color: String,
    sort_order: Option<i32>,
) -> Result<Status, String> {
    validate_name(&name).map_err(|e| e.to_string())?;
    let body = CreateStatusRequest { name: &name, color: &color, sort_order };
    state.api.create_status(project_id, pipeline_id, &body).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_status(
    state: State<'_, AppState>,
    project_id: u32,
    pipeline_id: u32,
    id: u32,
    name: Option<String>,
    color: Option<String>,
    sort_order: Option<i32>,
) -> Result<Status, String> {
    if let Some(name) = &name {
        validate_name(name).map_err(|e| e.to_string())?;
    }
    let body = UpdateStatusRequest { name: name.as_deref(), color: color.as_deref(), sort_order };
    state.api.update_status(project_id, pipeline_id, id, &body).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_status(
    state: State<'_, AppState>,
    project_id: u32,
    pipeline_id: u32,
    id: u32,
) -> Result<(), String> {
    state.api.delete_status(project_id, pipeline_id, id).await.map_err(|e| e.to_string())
}
