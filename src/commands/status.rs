//! Status Commands
//!
//! Frontend bindings for status (column) CRUD.

use serde::Serialize;
use crate::models::Status;
use super::invoke;

#[derive(Serialize)]
pub struct CreateStatusArgs<'a> {
    #[serde(rename = "projectId")]
    pub project_id: u32,
    #[serde(rename = "pipelineId")]
    pub pipeline_id: u32,
    pub name: &'a str,
    pub color: &'a str,
    #[serde(rename = "sortOrder")]
    pub sort_order: i32,
}

#[derive(Serialize)]
struct StatusScopeArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
    #[serde(rename = "pipelineId")]
    pipeline_id: u32,
}

#[derive(Serialize)]
struct StatusIdArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
    #[serde(rename = "pipelineId")]
    pipeline_id: u32,
    id: u32,
}

#[derive(Serialize)]
struct UpdateStatusArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    #[serde(rename = "pipelineId")]
    pipeline_id: u32,
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
    #[serde(rename = "sortOrder", skip_serializing_if = "Option::is_none")]
    sort_order: Option<i32>,
}

pub async fn list_statuses(project_id: u32, pipeline_id: u32) -> Result<Vec<Status>, String> {
    let js_args = serde_wasm_bindgen::to_value(&StatusScopeArgs { project_id, pipeline_id })
        .map_err(|e| e.to_string())?;
    let result = invoke("list_statuses", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_status(args: &CreateStatusArgs<'_>) -> Result<Status, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_status", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_status(
    project_id: u32,
    pipeline_id: u32,
    id: u32,
    name: Option<&str>,
    color: Option<&str>,
    sort_order: Option<i32>,
) -> Result<Status, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateStatusArgs {
        project_id,
        pipeline_id,
        id,
        name,
        color,
        sort_order,
    })
    .map_err(|e| e.to_string())?;
    let result = invoke("update_status", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_status(project_id: u32, pipeline_id: u32, id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&StatusIdArgs { project_id, pipeline_id, id })
        .map_err(|e| e.to_string())?;
    invoke("delete_status", js_args).await?;
    Ok(())
}
