//! Card Entity
//!
//! A task on the board. Cards are ordered within their status with
//! dense 0-based sort_order; the board client renumbers after every
//! reorder and persists the result in one bulk call.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::pipeline::SortEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub status_id: u32,
    pub user_id: u32,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl Entity for Card {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[derive(Debug, Serialize)]
pub struct CreateCardRequest<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct UpdateCardRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct MoveCardRequest {
    pub status_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// Body of PUT cards/bulk-sort
#[derive(Debug, Serialize)]
pub struct BulkCardSortRequest {
    pub cards: Vec<SortEntry>,
}

/// GET pipelines/{id}/cards wraps the card list with board context
#[derive(Debug, Deserialize)]
pub struct PipelineCardsResponse {
    pub pipeline_id: u32,
    pub pipeline_name: String,
    pub cards: Vec<Card>,
}
