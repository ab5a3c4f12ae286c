//! Card Item Component
//!
//! Single card in a column. Mousedown starts a potential drag; a plain
//! click (no drag) opens the edit modal. The insertion indicator renders
//! above the card whose slot is targeted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, make_on_row_mousemove, DndSignals, DragSource, DropTarget};

use crate::commands;
use crate::components::{CardModalMode, DeleteConfirmButton};
use crate::context::AppContext;
use crate::markdown;
use crate::models::Card;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CardItem(
    card: Card,
    index: usize,
    container: u32,
    dnd: DndSignals,
    drag_disabled: Signal<bool>,
    set_card_modal: WriteSignal<Option<CardModalMode>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = card.id;
    let title = card.title.clone();
    let preview = card
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(markdown::parse_markdown_inline);
    let card_for_modal = card.clone();

    let inner_mousedown = make_on_mousedown(dnd, DragSource { id, container, index });
    let on_mousedown = move |ev: web_sys::MouseEvent| {
        if !drag_disabled.get_untracked() {
            inner_mousedown(ev);
        }
    };
    let on_mousemove = make_on_row_mousemove(dnd, container, index);

    let delete = move |_| {
        let Some(project_id) = store.selected_project_id().get_untracked() else { return };
        spawn_local(async move {
            match commands::delete_card(project_id, id).await {
                Ok(()) => ctx.reload(),
                Err(e) => ctx.report_error(e),
            }
        });
    };

    let is_dragged = move || dnd.dragging_read.get().map_or(false, |d| d.id == id);
    let indicator = move || {
        dnd.drop_target_read.get() == Some(DropTarget::Slot { container, index })
    };

    view! {
        <Show when=indicator>
            <div class="drop-indicator"></div>
        </Show>
        <div
            class=move || if is_dragged() { "card-item dragging" } else { "card-item" }
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:click=move |_| {
                if !dnd.drag_just_ended_read.get_untracked() {
                    set_card_modal.set(Some(CardModalMode::Edit { card: card_for_modal.clone() }));
                }
            }
        >
            <div class="card-title-row">
                <div class="card-title">{title}</div>
                <DeleteConfirmButton button_class="card-delete-btn" on_confirm=delete />
            </div>
            {preview.map(|html| view! {
                <div class="card-preview" inner_html=html></div>
            })}
        </div>
    }
}
