//! Card Commands
//!
//! Frontend bindings for card CRUD, moves and bulk sort-order updates.

use serde::Serialize;
use crate::board::SortEntry;
use crate::models::Card;
use super::invoke;

#[derive(Serialize)]
pub struct CreateCardArgs<'a> {
    #[serde(rename = "projectId")]
    pub project_id: u32,
    #[serde(rename = "pipelineId")]
    pub pipeline_id: u32,
    #[serde(rename = "statusId")]
    pub status_id: u32,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(rename = "sortOrder")]
    pub sort_order: i32,
}

#[derive(Serialize)]
struct PipelineScopeArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
    #[serde(rename = "pipelineId")]
    pipeline_id: u32,
}

#[derive(Serialize)]
struct CardIdArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
    id: u32,
}

#[derive(Serialize)]
struct UpdateCardArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "sortOrder", skip_serializing_if = "Option::is_none")]
    sort_order: Option<i32>,
}

#[derive(Serialize)]
struct MoveCardArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
    id: u32,
    #[serde(rename = "statusId")]
    status_id: u32,
    #[serde(rename = "sortOrder")]
    sort_order: i32,
}

#[derive(Serialize)]
struct BulkSortArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    entries: &'a [SortEntry],
}

/// All cards of a pipeline in one request
pub async fn list_pipeline_cards(project_id: u32, pipeline_id: u32) -> Result<Vec<Card>, String> {
    let js_args = serde_wasm_bindgen::to_value(&PipelineScopeArgs { project_id, pipeline_id })
        .map_err(|e| e.to_string())?;
    let result = invoke("list_pipeline_cards", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_card(args: &CreateCardArgs<'_>) -> Result<Card, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_card", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_card(
    project_id: u32,
    id: u32,
    title: Option<&str>,
    description: Option<&str>,
    sort_order: Option<i32>,
) -> Result<Card, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateCardArgs { project_id, id, title, description, sort_order })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_card", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_card(project_id: u32, id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&CardIdArgs { project_id, id }).map_err(|e| e.to_string())?;
    invoke("delete_card", js_args).await?;
    Ok(())
}

/// Move a card to a status at a position
pub async fn move_card(project_id: u32, id: u32, status_id: u32, sort_order: i32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&MoveCardArgs { project_id, id, status_id, sort_order })
        .map_err(|e| e.to_string())?;
    invoke("move_card", js_args).await?;
    Ok(())
}

/// Persist a full column ordering in one call (0-based sort_order)
pub async fn bulk_sort_cards(project_id: u32, entries: &[SortEntry]) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&BulkSortArgs { project_id, entries }).map_err(|e| e.to_string())?;
    invoke("bulk_sort_cards", js_args).await?;
    Ok(())
}
