//! Project Commands
//!
//! Frontend bindings for project CRUD.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Project;
use super::invoke;

#[derive(Serialize)]
pub struct CreateProjectArgs<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct UpdateProjectArgs<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

pub async fn list_projects() -> Result<Vec<Project>, String> {
    let result = invoke("list_projects", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_project(args: &CreateProjectArgs<'_>) -> Result<Project, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_project", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_project(id: u32, name: Option<&str>, description: Option<&str>) -> Result<Project, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateProjectArgs { id, name, description })
        .map_err(|e| e.to_string())?;
    let result = invoke("update_project", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_project(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_project", js_args).await?;
    Ok(())
}
