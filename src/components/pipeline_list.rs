//! Pipeline List Component
//!
//! Sidebar listing the selected project's pipelines, draggable to reorder.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_mousedown, make_on_row_mousemove,
    resolve_slot, DragSource, DropTarget,
};

use crate::board;
use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::{use_app_store, store_select_pipeline, store_remove_pipeline, AppStateStoreFields};

/// Pipelines live in a single list; the dnd container id is fixed.
const PIPELINE_CONTAINER: u32 = 0;

#[component]
pub fn PipelineList(
    set_creating_pipeline: WriteSignal<bool>,
    set_settings_pipeline: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let dnd = create_dnd_signals();

    // Load pipelines whenever the project or the reload trigger changes
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(project_id) = store.selected_project_id().get() else {
            return;
        };
        spawn_local(async move {
            match commands::list_pipelines(project_id).await {
                Ok(mut loaded) => {
                    loaded.sort_by_key(|p| (p.sort_order, p.id));
                    let selected = store.selected_pipeline_id().get_untracked();
                    let still_there = selected.map_or(false, |id| loaded.iter().any(|p| p.id == id));
                    if !still_there {
                        let first = loaded.first().map(|p| p.id);
                        store_select_pipeline(&store, first);
                        spawn_local(async move {
                            let _ = commands::save_board_selection(Some(project_id), first).await;
                        });
                    }
                    store.pipelines().set(loaded);
                }
                Err(e) => ctx.report_error(e),
            }
        });
    });

    // Drop handler: optimistic reorder, persist in one bulk call, reload on failure
    bind_global_mouseup(dnd, move |source: DragSource, target: DropTarget| {
        let slot = match target {
            DropTarget::Slot { container, index } if container == PIPELINE_CONTAINER => index,
            _ => return,
        };
        let to = resolve_slot(source, PIPELINE_CONTAINER, slot);
        let from = source.index;
        if from == to {
            return;
        }
        let Some(project_id) = store.selected_project_id().get_untracked() else {
            return;
        };

        let current = store.pipelines().get_untracked();
        let reordered = board::reorder_pipelines(&current, from, to);
        let payload = board::pipeline_sort_payload(&reordered);
        store.pipelines().set(reordered);

        spawn_local(async move {
            if let Err(e) = commands::bulk_sort_pipelines(project_id, &payload).await {
                ctx.report_error(e);
                ctx.reload();
            }
        });
    });

    let select = move |pipeline_id: u32| {
        store_select_pipeline(&store, Some(pipeline_id));
        let project_id = store.selected_project_id().get_untracked();
        spawn_local(async move {
            let _ = commands::save_board_selection(project_id, Some(pipeline_id)).await;
        });
    };

    view! {
        <aside class="pipeline-sidebar">
            <div class="pipeline-sidebar-header">
                <h2>"Pipelines"</h2>
                <button
                    class="pipeline-add-btn"
                    on:click=move |_| set_creating_pipeline.set(true)
                >
                    "+"
                </button>
            </div>

            <div class="pipeline-list">
                <For
                    each={move || store.pipelines().get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(_, p)| p.id
                    children=move |(index, pipeline)| {
                        let id = pipeline.id;
                        let color = pipeline.color.clone();
                        let is_active = move || store.selected_pipeline_id().get() == Some(id);
                        let is_dragged = move || {
                            dnd.dragging_read.get().map_or(false, |d| d.id == id)
                        };
                        let row_class = move || {
                            let mut class = String::from("pipeline-row");
                            if is_active() { class.push_str(" active"); }
                            if is_dragged() { class.push_str(" dragging"); }
                            class
                        };
                        let indicator = move |edge_index: usize| {
                            dnd.drop_target_read.get()
                                == Some(DropTarget::Slot { container: PIPELINE_CONTAINER, index: edge_index })
                        };

                        let on_mousedown = make_on_mousedown(dnd, DragSource {
                            id,
                            container: PIPELINE_CONTAINER,
                            index,
                        });
                        let on_mousemove = make_on_row_mousemove(dnd, PIPELINE_CONTAINER, index);

                        view! {
                            <div class="pipeline-slot">
                                <Show when=move || indicator(index)>
                                    <div class="drop-indicator"></div>
                                </Show>
                                <div
                                    class=row_class
                                    on:mousedown=on_mousedown
                                    on:mousemove=on_mousemove
                                    on:click=move |_| {
                                        if !dnd.drag_just_ended_read.get_untracked() {
                                            select(id);
                                        }
                                    }
                                >
                                    <span class="pipeline-color" style=format!("background-color: {};", color)></span>
                                    <span class="pipeline-name">{pipeline.name.clone()}</span>
                                    <button
                                        class="pipeline-settings-btn"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            set_settings_pipeline.set(Some(id));
                                        }
                                    >
                                        "⚙"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="pipeline-delete-btn"
                                        on_confirm=move |_| {
                                            let Some(project_id) = store.selected_project_id().get_untracked() else {
                                                return;
                                            };
                                            spawn_local(async move {
                                                match commands::delete_pipeline(project_id, id).await {
                                                    Ok(()) => {
                                                        store_remove_pipeline(&store, id);
                                                        if store.selected_pipeline_id().get_untracked() == Some(id) {
                                                            let first = store.pipelines().get_untracked().first().map(|p| p.id);
                                                            store_select_pipeline(&store, first);
                                                        }
                                                    }
                                                    Err(e) => ctx.report_error(e),
                                                }
                                            });
                                        }
                                    />
                                </div>
                            </div>
                        }
                    }
                />
                // Trailing indicator when dropping below the last row
                <Show when=move || {
                    let count = store.pipelines().get().len();
                    dnd.drop_target_read.get()
                        == Some(DropTarget::Slot { container: PIPELINE_CONTAINER, index: count })
                }>
                    <div class="drop-indicator"></div>
                </Show>
            </div>
        </aside>
    }
}
