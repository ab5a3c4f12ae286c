//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Pipeline, Project, Status};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All projects of the logged-in user
    pub projects: Vec<Project>,
    /// Pipelines of the selected project
    pub pipelines: Vec<Pipeline>,
    /// Statuses (columns) of the selected pipeline
    pub statuses: Vec<Status>,
    /// Selected project ID
    pub selected_project_id: Option<u32>,
    /// Selected pipeline ID
    pub selected_pipeline_id: Option<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Update a project in the store by ID
pub fn store_update_project(store: &AppStore, updated: Project) {
    store.projects().write().iter_mut()
        .find(|p| p.id == updated.id)
        .map(|p| *p = updated);
}

/// Remove a project from the store by ID
pub fn store_remove_project(store: &AppStore, project_id: u32) {
    store.projects().write().retain(|p| p.id != project_id);
}

/// Add a pipeline to the store
pub fn store_add_pipeline(store: &AppStore, pipeline: Pipeline) {
    store.pipelines().write().push(pipeline);
}

/// Update a pipeline in the store by ID
pub fn store_update_pipeline(store: &AppStore, updated: Pipeline) {
    store.pipelines().write().iter_mut()
        .find(|p| p.id == updated.id)
        .map(|p| *p = updated);
}

/// Remove a pipeline from the store by ID
pub fn store_remove_pipeline(store: &AppStore, pipeline_id: u32) {
    store.pipelines().write().retain(|p| p.id != pipeline_id);
}

/// Update a status in the store by ID
pub fn store_update_status(store: &AppStore, updated: Status) {
    store.statuses().write().iter_mut()
        .find(|s| s.id == updated.id)
        .map(|s| *s = updated);
}

/// Select a project and drop state scoped to the previous one
pub fn store_select_project(store: &AppStore, project_id: Option<u32>) {
    store.selected_project_id().set(project_id);
    store.selected_pipeline_id().set(None);
    store.pipelines().write().clear();
    store.statuses().write().clear();
}

/// Select a pipeline within the current project
pub fn store_select_pipeline(store: &AppStore, pipeline_id: Option<u32>) {
    store.selected_pipeline_id().set(pipeline_id);
    store.statuses().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project(id: u32) -> Project {
        Project {
            id,
            name: format!("Project {}", id),
            description: None,
            user_id: 1,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn update_and_remove_project() {
        let store = Store::new(AppState::new());
        store.projects().set(vec![make_project(1), make_project(2)]);

        let mut renamed = make_project(1);
        renamed.name = "Renamed".to_string();
        store_update_project(&store, renamed);
        assert_eq!(store.projects().get_untracked()[0].name, "Renamed");

        store_remove_project(&store, 1);
        let ids: Vec<u32> = store.projects().get_untracked().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn selecting_project_drops_pipeline_scope() {
        let store = Store::new(AppState::new());
        store.selected_pipeline_id().set(Some(9));

        store_select_project(&store, Some(2));
        assert_eq!(store.selected_project_id().get_untracked(), Some(2));
        assert_eq!(store.selected_pipeline_id().get_untracked(), None);
        assert!(store.pipelines().get_untracked().is_empty());
        assert!(store.statuses().get_untracked().is_empty());
    }
}
