//! Pipeline Commands
//!
//! Frontend bindings for pipeline CRUD and bulk sort-order updates.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::board::SortEntry;
use crate::models::Pipeline;
use super::invoke;

#[derive(Serialize)]
pub struct CreatePipelineArgs<'a> {
    #[serde(rename = "projectId")]
    pub project_id: u32,
    pub name: &'a str,
    pub color: &'a str,
    #[serde(rename = "sortOrder")]
    pub sort_order: i32,
}

#[derive(Serialize)]
struct ProjectIdArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
}

#[derive(Serialize)]
struct PipelineIdArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
    id: u32,
}

#[derive(Serialize)]
struct UpdatePipelineArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
    #[serde(rename = "sortOrder", skip_serializing_if = "Option::is_none")]
    sort_order: Option<i32>,
}

#[derive(Serialize)]
struct BulkSortArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    entries: &'a [SortEntry],
}

pub async fn list_pipelines(project_id: u32) -> Result<Vec<Pipeline>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ProjectIdArgs { project_id }).map_err(|e| e.to_string())?;
    let result = invoke("list_pipelines", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_pipeline(args: &CreatePipelineArgs<'_>) -> Result<Pipeline, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_pipeline", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_pipeline(
    project_id: u32,
    id: u32,
    name: Option<&str>,
    color: Option<&str>,
    sort_order: Option<i32>,
) -> Result<Pipeline, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdatePipelineArgs { project_id, id, name, color, sort_order })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_pipeline", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_pipeline(project_id: u32, id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&PipelineIdArgs { project_id, id }).map_err(|e| e.to_string())?;
    invoke("delete_pipeline", js_args).await?;
    Ok(())
}

/// Persist a full pipeline ordering in one call (1-based sort_order)
pub async fn bulk_sort_pipelines(project_id: u32, entries: &[SortEntry]) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&BulkSortArgs { project_id, entries }).map_err(|e| e.to_string())?;
    invoke("bulk_sort_pipelines", js_args).await?;
    Ok(())
}
