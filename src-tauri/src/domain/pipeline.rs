//! Pipeline Entity
//!
//! A kanban board inside a project. Pipelines are ordered within their
//! project with 1-based sort_order.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub project_id: u32,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl Entity for Pipeline {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePipelineRequest<'a> {
    pub name: &'a str,
    pub color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct UpdatePipelineRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// One entry of a bulk sort-order update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortEntry {
    pub id: u32,
    pub sort_order: i32,
}

/// Body of PUT pipelines/bulk-sort
#[derive(Debug, Serialize)]
pub struct BulkPipelineSortRequest {
    pub pipelines: Vec<SortEntry>,
}
