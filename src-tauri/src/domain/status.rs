//! Status Entity
//!
//! A column of a pipeline, ordered with 1-based sort_order.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub pipeline_id: u32,
    pub sort_order: i32,
    #[serde(default)]
    pub is_collapsed: Option<bool>,
    pub created_at: String,
    pub updated_at: String,
}

impl Entity for Status {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[derive(Debug, Serialize)]
pub struct CreateStatusRequest<'a> {
    pub name: &'a str,
    pub color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}
