//! Project Selector Component
//!
//! Tab bar for switching between projects in the dashboard header. The
//! active tab renames on double-click and carries a delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateProjectArgs};
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::{
    store_remove_project, store_select_project, store_update_project, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn ProjectSelector() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());
    let (editing_project, set_editing_project) = signal(Option::<u32>::None);
    let (edit_name, set_edit_name) = signal(String::new());

    let select = move |project_id: u32| {
        store_select_project(&store, Some(project_id));
        spawn_local(async move {
            let _ = commands::save_board_selection(Some(project_id), None).await;
        });
    };

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.is_empty() { return; }

        spawn_local(async move {
            match commands::create_project(&CreateProjectArgs { name: &name, description: None }).await {
                Ok(created) => {
                    let id = created.id;
                    store.projects().write().push(created);
                    select(id);
                }
                Err(e) => ctx.report_error(e),
            }
        });

        set_new_name.set(String::new());
        set_adding.set(false);
    };

    let rename = move |id: u32| {
        set_editing_project.set(None);
        let name = edit_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::update_project(id, Some(&name), None).await {
                Ok(updated) => store_update_project(&store, updated),
                Err(e) => ctx.report_error(e),
            }
        });
    };

    let delete = move |id: u32| {
        spawn_local(async move {
            match commands::delete_project(id).await {
                Ok(()) => {
                    store_remove_project(&store, id);
                    let next = store.projects().get_untracked().first().map(|p| p.id);
                    store_select_project(&store, next);
                    let _ = commands::save_board_selection(next, None).await;
                }
                Err(e) => ctx.report_error(e),
            }
        });
    };

    view! {
        <div class="project-tab-bar">
            <For
                each=move || store.projects().get()
                key=|p| p.id
                children=move |project| {
                    let id = project.id;
                    let name = project.name.clone();
                    let edit_start_name = name.clone();
                    let is_active = move || store.selected_project_id().get() == Some(id);
                    let is_editing = move || editing_project.get() == Some(id);
                    let tab_class = move || {
                        if is_active() { "project-tab active" } else { "project-tab" }
                    };

                    view! {
                        <div class=move || if is_active() { "project-tab-wrap active" } else { "project-tab-wrap" }>
                            {move || if is_editing() {
                                view! {
                                    <input
                                        class="project-rename-input"
                                        prop:value=move || edit_name.get()
                                        on:input=move |ev| set_edit_name.set(event_target_value(&ev))
                                        on:blur=move |_| rename(id)
                                        on:keydown=move |ev| {
                                            if ev.key() == "Enter" {
                                                rename(id);
                                            } else if ev.key() == "Escape" {
                                                set_editing_project.set(None);
                                            }
                                        }
                                    />
                                }.into_any()
                            } else {
                                let name = name.clone();
                                let edit_start_name = edit_start_name.clone();
                                view! {
                                    <button
                                        class=tab_class
                                        on:click=move |_| select(id)
                                        on:dblclick=move |_| {
                                            if is_active() {
                                                set_edit_name.set(edit_start_name.clone());
                                                set_editing_project.set(Some(id));
                                            }
                                        }
                                    >
                                        {name}
                                    </button>
                                }.into_any()
                            }}
                            <Show when=is_active>
                                <DeleteConfirmButton
                                    button_class="project-delete-btn"
                                    on_confirm=move |_| delete(id)
                                />
                            </Show>
                        </div>
                    }
                }
            />

            {move || if adding.get() {
                view! {
                    <form class="project-add-form" on:submit=on_add>
                        <input
                            type="text"
                            placeholder="Project name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"+"</button>
                        <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button
                        class="project-add-btn"
                        on:click=move |_| set_adding.set(true)
                    >
                        "+"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
