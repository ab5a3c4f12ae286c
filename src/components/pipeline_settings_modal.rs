//! Pipeline Settings Modal
//!
//! Rename/recolor a pipeline and manage its statuses: create, edit,
//! delete and reorder with up/down buttons. Status order is 1-based;
//! every reorder renumbers the whole list, which also repairs duplicate
//! orders left behind by concurrent edits.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board;
use crate::commands::{self, CreateStatusArgs};
use crate::components::{ColorPicker, DeleteConfirmButton, COLOR_PALETTE};
use crate::context::AppContext;
use crate::models::Status;
use crate::store::{use_app_store, store_update_pipeline, AppStateStoreFields};

#[component]
pub fn PipelineSettingsModal(
    pipeline_id: u32,
    set_settings_pipeline: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let pipeline = store
        .pipelines()
        .get_untracked()
        .into_iter()
        .find(|p| p.id == pipeline_id);
    let (pipeline_name, set_pipeline_name) = signal(
        pipeline.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
    );
    let (pipeline_color, set_pipeline_color) = signal(
        pipeline
            .as_ref()
            .map(|p| p.color.clone())
            .unwrap_or_else(|| COLOR_PALETTE[0].to_string()),
    );

    let (statuses, set_statuses) = signal(Vec::<Status>::new());
    let (editing_status, set_editing_status) = signal(Option::<u32>::None);
    let (edit_name, set_edit_name) = signal(String::new());
    let (edit_color, set_edit_color) = signal(String::new());
    let (new_status_name, set_new_status_name) = signal(String::new());
    let (new_status_color, set_new_status_color) = signal(COLOR_PALETTE[0].to_string());

    // Push the repaired 1-based orders to the server, one update per row
    let persist_repairs = move |project_id: u32, repairs: Vec<board::SortEntry>| {
        spawn_local(async move {
            for entry in repairs {
                if let Err(e) = commands::update_status(
                    project_id,
                    pipeline_id,
                    entry.id,
                    None,
                    None,
                    Some(entry.sort_order),
                )
                .await
                {
                    ctx.report_error(e);
                    return;
                }
            }
        });
    };

    // The modal can target a pipeline other than the selected one, so it
    // loads its own status list. Duplicate or sparse orders left behind by
    // concurrent edits get renumbered right away.
    Effect::new(move |_| {
        let Some(project_id) = store.selected_project_id().get() else { return };
        spawn_local(async move {
            match commands::list_statuses(project_id, pipeline_id).await {
                Ok(mut loaded) => {
                    loaded.sort_by_key(|s| (s.sort_order, s.id));
                    let repairs = board::status_order_repairs(&loaded);
                    for entry in &repairs {
                        if let Some(s) = loaded.iter_mut().find(|s| s.id == entry.id) {
                            s.sort_order = entry.sort_order;
                        }
                    }
                    set_statuses.set(loaded);
                    persist_repairs(project_id, repairs);
                }
                Err(e) => ctx.report_error(e),
            }
        });
    });

    // Board state may be stale after status edits
    let close = move || {
        set_settings_pipeline.set(None);
        ctx.reload();
    };

    let save_pipeline = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = pipeline_name.get();
        if name.trim().is_empty() {
            return;
        }
        let color = pipeline_color.get();
        let Some(project_id) = store.selected_project_id().get_untracked() else { return };
        spawn_local(async move {
            match commands::update_pipeline(project_id, pipeline_id, Some(&name), Some(&color), None).await {
                Ok(updated) => store_update_pipeline(&store, updated),
                Err(e) => ctx.report_error(e),
            }
        });
    };

    // Renumber 1-based and persist every status whose order changed
    let persist_order = move |reordered: Vec<Status>| {
        let Some(project_id) = store.selected_project_id().get_untracked() else { return };
        let mut renumbered = reordered;
        let repairs = board::status_order_repairs(&renumbered);
        for entry in &repairs {
            if let Some(s) = renumbered.iter_mut().find(|s| s.id == entry.id) {
                s.sort_order = entry.sort_order;
            }
        }
        set_statuses.set(renumbered);
        persist_repairs(project_id, repairs);
    };

    let move_status = move |status_id: u32, delta: i32| {
        let list = statuses.get_untracked();
        let Some(pos) = list.iter().position(|s| s.id == status_id) else { return };
        let new_pos = pos as i32 + delta;
        if new_pos < 0 || new_pos as usize >= list.len() {
            return;
        }
        let mut reordered = list;
        reordered.swap(pos, new_pos as usize);
        persist_order(reordered);
    };

    let add_status = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_status_name.get();
        if name.trim().is_empty() {
            return;
        }
        let color = new_status_color.get();
        let Some(project_id) = store.selected_project_id().get_untracked() else { return };
        let sort_order = statuses.get_untracked().len() as i32 + 1;
        spawn_local(async move {
            match commands::create_status(&CreateStatusArgs {
                project_id,
                pipeline_id,
                name: &name,
                color: &color,
                sort_order,
            })
            .await
            {
                Ok(created) => {
                    set_statuses.update(|list| list.push(created));
                    set_new_status_name.set(String::new());
                }
                Err(e) => ctx.report_error(e),
            }
        });
    };

    let save_status_edit = move |status_id: u32| {
        let name = edit_name.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        let color = edit_color.get_untracked();
        let Some(project_id) = store.selected_project_id().get_untracked() else { return };
        spawn_local(async move {
            match commands::update_status(project_id, pipeline_id, status_id, Some(&name), Some(&color), None).await {
                Ok(updated) => {
                    set_statuses.update(|list| {
                        if let Some(s) = list.iter_mut().find(|s| s.id == status_id) {
                            *s = updated;
                        }
                    });
                    set_editing_status.set(None);
                }
                Err(e) => ctx.report_error(e),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div class="modal pipeline-settings-modal" on:click=move |ev| ev.stop_propagation()>
                <h3>"Pipeline settings"</h3>

                <form class="pipeline-edit-form" on:submit=save_pipeline>
                    <input
                        type="text"
                        prop:value=move || pipeline_name.get()
                        on:input=move |ev| set_pipeline_name.set(event_target_value(&ev))
                    />
                    <ColorPicker color=pipeline_color set_color=set_pipeline_color />
                    <button type="submit">"Save"</button>
                </form>

                <h4>"Statuses"</h4>
                <div class="status-settings-list">
                    <For
                        each=move || statuses.get()
                        key=|s| s.id
                        children=move |status| {
                            let id = status.id;
                            let name = status.name.clone();
                            let color = status.color.clone();
                            let edit_start_name = name.clone();
                            let edit_start_color = color.clone();
                            let is_editing = move || editing_status.get() == Some(id);

                            view! {
                                <div class="status-settings-row">
                                    {move || if is_editing() {
                                        view! {
                                            <div class="status-edit-form">
                                                <input
                                                    type="text"
                                                    prop:value=move || edit_name.get()
                                                    on:input=move |ev| set_edit_name.set(event_target_value(&ev))
                                                />
                                                <ColorPicker color=edit_color set_color=set_edit_color />
                                                <button type="button" on:click=move |_| save_status_edit(id)>"✓"</button>
                                                <button type="button" on:click=move |_| set_editing_status.set(None)>"✗"</button>
                                            </div>
                                        }.into_any()
                                    } else {
                                        let name = name.clone();
                                        let color = color.clone();
                                        let edit_start_name = edit_start_name.clone();
                                        let edit_start_color = edit_start_color.clone();
                                        view! {
                                            <div class="status-row-view">
                                                <span class="status-color" style=format!("background-color: {};", color)></span>
                                                <span class="status-name">{name}</span>
                                                <button type="button" on:click=move |_| move_status(id, -1)>"↑"</button>
                                                <button type="button" on:click=move |_| move_status(id, 1)>"↓"</button>
                                                <button
                                                    type="button"
                                                    on:click=move |_| {
                                                        set_edit_name.set(edit_start_name.clone());
                                                        set_edit_color.set(edit_start_color.clone());
                                                        set_editing_status.set(Some(id));
                                                    }
                                                >
                                                    "✎"
                                                </button>
                                                <DeleteConfirmButton
                                                    button_class="status-delete-btn"
                                                    on_confirm=move |_| {
                                                        let Some(project_id) = store.selected_project_id().get_untracked() else {
                                                            return;
                                                        };
                                                        spawn_local(async move {
                                                            match commands::delete_status(project_id, pipeline_id, id).await {
                                                                Ok(()) => {
                                                                    // Close the gap the delete leaves in the 1-based order
                                                                    let mut remaining = statuses.get_untracked();
                                                                    remaining.retain(|s| s.id != id);
                                                                    let repairs = board::status_order_repairs(&remaining);
                                                                    for entry in &repairs {
                                                                        if let Some(s) = remaining.iter_mut().find(|s| s.id == entry.id) {
                                                                            s.sort_order = entry.sort_order;
                                                                        }
                                                                    }
                                                                    set_statuses.set(remaining);
                                                                    persist_repairs(project_id, repairs);
                                                                }
                                                                Err(e) => ctx.report_error(e),
                                                            }
                                                        });
                                                    }
                                                />
                                            </div>
                                        }.into_any()
                                    }}
                                </div>
                            }
                        }
                    />
                </div>

                <form class="status-add-form" on:submit=add_status>
                    <input
                        type="text"
                        placeholder="New status"
                        prop:value=move || new_status_name.get()
                        on:input=move |ev| set_new_status_name.set(event_target_value(&ev))
                    />
                    <ColorPicker color=new_status_color set_color=set_new_status_color />
                    <button type="submit">"Add"</button>
                </form>

                <div class="modal-actions">
                    <button type="button" on:click=move |_| close()>"Close"</button>
                </div>
            </div>
        </div>
    }
}
