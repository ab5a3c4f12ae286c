//! Project Endpoints

use crate::domain::{CreateProjectRequest, DomainResult, Project, UpdateProjectRequest};
use super::client::ApiClient;

impl ApiClient {
    pub async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        self.get("/projects").await
    }

    pub async fn create_project(&self, body: &CreateProjectRequest<'_>) -> DomainResult<Project> {
        self.post("/projects", body).await
    }

    pub async fn update_project(&self, id: u32, body: &UpdateProjectRequest<'_>) -> DomainResult<Project> {
        self.put(&format!("/projects/{}", id), body).await
    }

    pub async fn delete_project(&self, id: u32) -> DomainResult<()> {
        self.delete(&format!("/projects/{}", id)).await
    }
}
