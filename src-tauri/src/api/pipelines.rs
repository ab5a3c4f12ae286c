//! Pipeline Endpoints

use crate::domain::{
    BulkPipelineSortRequest, CreatePipelineRequest, DomainResult, Pipeline, SortEntry,
    UpdatePipelineRequest,
};
use super::client::ApiClient;

impl ApiClient {
    pub async fn list_pipelines(&self, project_id: u32) -> DomainResult<Vec<Pipeline>> {
        self.get(&format!("/projects/{}/pipelines", project_id)).await
    }

    pub async fn create_pipeline(
        &self,
        project_id: u32,
        body: &CreatePipelineRequest<'_>,
    ) -> DomainResult<Pipeline> {
        self.post(&format!("/projects/{}/pipelines", project_id), body).await
    }

    pub async fn update_pipeline(
        &self,
        project_id: u32,
        id: u32,
        body: &UpdatePipelineRequest<'_>,
    ) -> DomainResult<Pipeline> {
        self.put(&format!("/projects/{}/pipelines/{}", project_id, id), body).await
    }

    pub async fn delete_pipeline(&self, project_id: u32, id: u32) -> DomainResult<()> {
        self.delete(&format!("/projects/{}/pipelines/{}", project_id, id)).await
    }

    /// One call persists the whole project's pipeline order (1-based)
    pub async fn bulk_sort_pipelines(&self, project_id: u32, entries: Vec<SortEntry>) -> DomainResult<()> {
        let body = BulkPipelineSortRequest { pipelines: entries };
        self.put_unit(&format!("/projects/{}/pipelines/bulk-sort", project_id), &body).await
    }
}
