//! Tauri Commands for Project CRUD

use tauri::State;
use crate::domain::{validate_name, CreateProjectRequest, Project, UpdateProjectRequest};
use crate::AppState;

#[tauri::command]
pub async fn list_projects(state: State<'_, AppState>) -> Result<Vec<Project>, String> {
    state.api.list_projects().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_project(
    state: State<'_, AppState>,
    name: String,
    description: Option<String>,
) -> Result<Project, String> {
    validate_name(&name).map_err(|e| e.to_string())?;
    let body = CreateProjectRequest { name: &name, description: description.as_deref() };
    state.api.create_project(&body).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_project(
    state: State<'_, AppState>,
    id: u32,
    name: Option<String>,
    description: Option<String>,
) -> Result<Project, String> {
    if let Some(name) = &name {
        validate_name(name).map_err(|e| e.to_string())?;
    }
    let body = UpdateProjectRequest { name: name.as_deref(), description: description.as_deref() };
    state.api.update_project(id, &body).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_project(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state.api.delete_project(id).await.map_err(|e| e.to_string())
}
