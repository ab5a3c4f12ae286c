//! Status Endpoints

use crate::domain::{CreateStatusRequest, DomainResult, Status, UpdateStatusRequest};
use super::client::ApiClient;

impl ApiClient {
    pub async fn list_statuses(&self, project_id: u32, pipeline_id: u32) -> DomainResult<Vec<Status>> {
        self.get(&format!("/projects/{}/pipelines/{}/statuses", project_id, pipeline_id)).await
    }

    pub async fn create_status(
        &self,
        project_id: u32,
        pipeline_id: u32,
        body: &CreateStatusRequest<'_>,
    ) -> DomainResult<Status> {
        self.post(&format!("/projects/{}/pipelines/{}/statuses", project_id, pipeline_id), body).await
    }

    pub async fn update_status(
        &self,
        project_id: u32,
        pipeline_id: u32,
        id: u32,
        body: &UpdateStatusRequest<'_>,
    ) -> DomainResult<Status> {
        self.put(
            &format!("/projects/{}/pipelines/{}/statuses/{}", project_id, pipeline_id, id),
            body,
        )
        .await
    }

    pub async fn delete_status(&self, project_id: u32, pipeline_id: u32, id: u32) -> DomainResult<()> {
        self.delete(&format!("/projects/{}/pipelines/{}/statuses/{}", project_id, pipeline_id, id)).await
    }
}
