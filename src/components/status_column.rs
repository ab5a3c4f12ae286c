//! Status Column Component
//!
//! One kanban column: header with name, color and card count, the card
//! list, and an add-card button. The column name edits inline on
//! double-click.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_container_mouseenter, DndSignals, DropTarget};

use crate::board;
use crate::commands;
use crate::components::{CardItem, CardModalMode};
use crate::context::AppContext;
use crate::models::{Card, Status};
use crate::store::{store_update_status, use_app_store, AppStateStoreFields};

#[component]
pub fn StatusColumn(
    status: Status,
    cards: Signal<Vec<Card>>,
    dnd: DndSignals,
    drag_disabled: Signal<bool>,
    set_card_modal: WriteSignal<Option<CardModalMode>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let status_id = status.id;
    let color = status.color.clone();

    let (editing, set_editing) = signal(false);
    let (edit_name, set_edit_name) = signal(status.name.clone());
    let original_name = StoredValue::new(status.name.clone());
    let (collapsed, set_collapsed) = signal(status.is_collapsed.unwrap_or(false));

    let on_container_enter = make_on_container_mouseenter(dnd, status_id);

    let trailing_indicator = move || {
        let count = cards.get().len();
        match dnd.drop_target_read.get() {
            Some(DropTarget::Slot { container, index }) => container == status_id && index == count,
            Some(DropTarget::Container(container)) => container == status_id && count == 0,
            None => false,
        }
    };

    let rename = move || {
        set_editing.set(false);
        let name = edit_name.get_untracked().trim().to_string();
        if name.is_empty() || name == original_name.get_value() {
            set_edit_name.set(original_name.get_value());
            return;
        }
        let (Some(project_id), Some(pipeline_id)) = (
            store.selected_project_id().get_untracked(),
            store.selected_pipeline_id().get_untracked(),
        ) else {
            return;
        };
        spawn_local(async move {
            match commands::update_status(project_id, pipeline_id, status_id, Some(&name), None, None)
                .await
            {
                Ok(updated) => {
                    original_name.set_value(updated.name.clone());
                    store_update_status(&store, updated);
                }
                Err(e) => {
                    set_edit_name.set(original_name.get_value());
                    ctx.report_error(e);
                }
            }
        });
    };

    view! {
        <div
            class=move || if collapsed.get() { "status-column collapsed" } else { "status-column" }
            on:mouseenter=on_container_enter
        >
            <div class="status-column-header" style=format!("border-top-color: {};", color)>
                <button
                    class="collapse-toggle"
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "▸" } else { "▾" }}
                </button>
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <span
                            class="status-name"
                            on:dblclick=move |_| set_editing.set(true)
                        >
                            {move || edit_name.get()}
                        </span>
                    }
                >
                    <input
                        class="status-name-input"
                        prop:value=move || edit_name.get()
                        on:input=move |ev| set_edit_name.set(event_target_value(&ev))
                        on:blur=move |_| rename()
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                rename();
                            } else if ev.key() == "Escape" {
                                set_edit_name.set(original_name.get_value());
                                set_editing.set(false);
                            }
                        }
                    />
                </Show>
                <span class="status-card-count">{move || cards.get().len()}</span>
            </div>

            <div class="status-column-cards" class:hidden=move || collapsed.get()>
                <For
                    each={move || cards.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(_, c)| c.id
                    children=move |(index, card)| {
                        view! {
                            <CardItem
                                card=card
                                index=index
                                container=status_id
                                dnd=dnd
                                drag_disabled=drag_disabled
                                set_card_modal=set_card_modal
                            />
                        }
                    }
                />
                <Show when=trailing_indicator>
                    <div class="drop-indicator"></div>
                </Show>
            </div>

            <button
                class="add-card-btn"
                class:hidden=move || collapsed.get()
                on:click=move |_| {
                    let sort_order = board::next_card_sort_order(&cards.get_untracked());
                    set_card_modal.set(Some(CardModalMode::Create { status_id, sort_order }));
                }
            >
                "+ Add card"
            </button>
        </div>
    }
}
