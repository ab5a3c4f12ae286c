//! Card Endpoints

use crate::domain::{
    BulkCardSortRequest, Card, CreateCardRequest, DomainResult, MoveCardRequest,
    PipelineCardsResponse, SortEntry, UpdateCardRequest,
};
use super::client::ApiClient;

impl ApiClient {
    /// All cards of a pipeline in one request
    pub async fn list_pipeline_cards(&self, project_id: u32, pipeline_id: u32) -> DomainResult<Vec<Card>> {
        let response: PipelineCardsResponse = self
            .get(&format!("/projects/{}/pipelines/{}/cards", project_id, pipeline_id))
            .await?;
        Ok(response.cards)
    }

    pub async fn create_card(
        &self,
        project_id: u32,
        pipeline_id: u32,
        status_id: u32,
        body: &CreateCardRequest<'_>,
    ) -> DomainResult<Card> {
        self.post(
            &format!(
                "/projects/{}/pipelines/{}/statuses/{}/cards",
                project_id, pipeline_id, status_id
            ),
            body,
        )
        .await
    }

    pub async fn update_card(&self, project_id: u32, id: u32, body: &UpdateCardRequest<'_>) -> DomainResult<Card> {
        self.put(&format!("/projects/{}/cards/{}", project_id, id), body).await
    }

    pub async fn delete_card(&self, project_id: u32, id: u32) -> DomainResult<()> {
        self.delete(&format!("/projects/{}/cards/{}", project_id, id)).await
    }

    pub async fn move_card(&self, project_id: u32, id: u32, body: &MoveCardRequest) -> DomainResult<()> {
        self.put_unit(&format!("/projects/{}/cards/{}/move", project_id, id), body).await
    }

    /// One call persists whole columns' card order (0-based)
    pub async fn bulk_sort_cards(&self, project_id: u32, entries: Vec<SortEntry>) -> DomainResult<()> {
        let body = BulkCardSortRequest { cards: entries };
        self.put_unit(&format!("/projects/{}/cards/bulk-sort", project_id), &body).await
    }
}
