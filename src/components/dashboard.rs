//! Dashboard Component
//!
//! Main screen after login: header with search and user menu, project
//! tabs, pipeline sidebar and the kanban board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{
    BackupManager, CardSearch, ChangePasswordModal, CreatePipelineModal, KanbanBoard,
    PipelineList, PipelineSettingsModal, ProjectSelector,
};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (creating_pipeline, set_creating_pipeline) = signal(false);
    let (settings_pipeline, set_settings_pipeline) = signal(Option::<u32>::None);
    let (backup_open, set_backup_open) = signal(false);
    let (password_open, set_password_open) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    // Load projects once, then restore the saved selection if it still
    // points at an existing project.
    Effect::new(move |_| {
        spawn_local(async move {
            let projects = match commands::list_projects().await {
                Ok(loaded) => loaded,
                Err(e) => {
                    ctx.report_error(e);
                    return;
                }
            };
            let saved = commands::load_board_selection().await.unwrap_or_default();

            let project_id = saved
                .project_id
                .filter(|id| projects.iter().any(|p| p.id == *id))
                .or_else(|| projects.first().map(|p| p.id));

            store.projects().set(projects);
            store.selected_project_id().set(project_id);
            if saved.project_id == project_id {
                store.selected_pipeline_id().set(saved.pipeline_id);
            }
        });
    });

    let logout = move |_| {
        spawn_local(async move {
            let _ = commands::logout().await;
            ctx.set_user(None);
        });
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Nadder"</h1>

                <CardSearch />

                <div class="user-menu">
                    <button class="user-menu-btn" on:click=move |_| set_menu_open.update(|v| *v = !*v)>
                        {move || ctx.user.get().map(|u| u.name).unwrap_or_default()}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="user-menu-dropdown">
                            <button on:click=move |_| {
                                set_menu_open.set(false);
                                set_password_open.set(true);
                            }>"Change password"</button>
                            <button on:click=move |_| {
                                set_menu_open.set(false);
                                set_backup_open.set(true);
                            }>"Backups"</button>
                            <button on:click=logout>"Logout"</button>
                        </div>
                    </Show>
                </div>
            </header>

            {move || ctx.last_error.get().map(|msg| view! {
                <div class="error-banner">
                    <span>{msg}</span>
                    <button on:click=move |_| ctx.clear_error()>"×"</button>
                </div>
            })}

            <ProjectSelector />

            <div class="dashboard-body">
                <PipelineList
                    set_creating_pipeline=set_creating_pipeline
                    set_settings_pipeline=set_settings_pipeline
                />

                {move || if store.selected_pipeline_id().get().is_some() {
                    let settings_open = Signal::derive(move || settings_pipeline.get().is_some());
                    view! { <KanbanBoard settings_open=settings_open /> }.into_any()
                } else {
                    view! {
                        <div class="empty-board">
                            "Select or create a pipeline to get started"
                        </div>
                    }.into_any()
                }}
            </div>

            <Show when=move || creating_pipeline.get()>
                <CreatePipelineModal set_open=set_creating_pipeline />
            </Show>

            {move || settings_pipeline.get().map(|pipeline_id| view! {
                <PipelineSettingsModal
                    pipeline_id=pipeline_id
                    set_settings_pipeline=set_settings_pipeline
                />
            })}

            <Show when=move || backup_open.get()>
                <BackupManager set_open=set_backup_open />
            </Show>

            <Show when=move || password_open.get()>
                <ChangePasswordModal set_open=set_password_open />
            </Show>
        </div>
    }
}
