//! Tauri Commands for Local Preferences

use serde::Serialize;
use tauri::State;
use crate::AppState;

/// Last board selection handed to the frontend (staleness already applied)
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoardSelection {
    pub project_id: Option<u32>,
    pub pipeline_id: Option<u32>,
}

#[tauri::command]
pub async fn load_board_selection(state: State<'_, AppState>) -> Result<BoardSelection, String> {
    let selection = state.prefs.selection();
    Ok(selection
        .map(|s| BoardSelection { project_id: s.project_id, pipeline_id: s.pipeline_id })
        .unwrap_or_default())
}

#[tauri::command]
pub async fn save_board_selection(
    state: State<'_, AppState>,
    project_id: Option<u32>,
    pipeline_id: Option<u32>,
) -> Result<(), String> {
    state.prefs.save_selection(project_id, pipeline_id).map_err(|e| e.to_string())
}
