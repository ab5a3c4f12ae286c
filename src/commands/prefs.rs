//! Preference Commands
//!
//! Frontend bindings for the locally persisted board selection.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::BoardSelection;
use super::invoke;

#[derive(Serialize)]
struct SaveSelectionArgs {
    #[serde(rename = "projectId", skip_serializing_if = "Option::is_none")]
    project_id: Option<u32>,
    #[serde(rename = "pipelineId", skip_serializing_if = "Option::is_none")]
    pipeline_id: Option<u32>,
}

/// Last selected project/pipeline (already staleness-checked by the backend)
pub async fn load_board_selection() -> Result<BoardSelection, String> {
    let result = invoke("load_board_selection", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Persist the selected project; pass `pipeline_id: None` to clear the
/// stored pipeline (it belonged to another project).
pub async fn save_board_selection(project_id: Option<u32>, pipeline_id: Option<u32>) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&SaveSelectionArgs { project_id, pipeline_id })
        .map_err(|e| e.to_string())?;
    invoke("save_board_selection", js_args).await?;
    Ok(())
}
