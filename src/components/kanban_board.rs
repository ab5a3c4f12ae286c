//! Kanban Board Component
//!
//! Columns for the selected pipeline's statuses, cards draggable within
//! and across columns. Reordering is optimistic: the board updates
//! immediately and reloads from the server only when persisting fails.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, resolve_slot, DragSource, DropTarget,
};

use crate::board;
use crate::commands;
use crate::components::{CardModal, CardModalMode, StatusColumn};
use crate::context::AppContext;
use crate::models::Card;
use crate::store::{use_app_store, AppStateStoreFields};

/// Dragging stays off while the card modal or the pipeline settings are open
fn drag_disabled_signal(
    card_modal: ReadSignal<Option<CardModalMode>>,
    settings_open: Signal<bool>,
) -> Signal<bool> {
    Signal::derive(move || card_modal.get().is_some() || settings_open.get())
}

#[component]
pub fn KanbanBoard(settings_open: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let dnd = create_dnd_signals();

    let (cards_by_status, set_cards_by_status) = signal(HashMap::<u32, Vec<Card>>::new());
    let (card_modal, set_card_modal) = signal(Option::<CardModalMode>::None);

    let drag_disabled = drag_disabled_signal(card_modal, settings_open);

    // Load statuses and cards when the pipeline or the trigger changes
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(project_id) = store.selected_project_id().get() else {
            store.statuses().write().clear();
            set_cards_by_status.set(HashMap::new());
            return;
        };
        let Some(pipeline_id) = store.selected_pipeline_id().get() else {
            store.statuses().write().clear();
            set_cards_by_status.set(HashMap::new());
            return;
        };
        spawn_local(async move {
            match commands::list_statuses(project_id, pipeline_id).await {
                Ok(mut statuses) => {
                    statuses.sort_by_key(|s| (s.sort_order, s.id));
                    store.statuses().set(statuses);
                }
                Err(e) => {
                    ctx.report_error(e);
                    return;
                }
            }
            match commands::list_pipeline_cards(project_id, pipeline_id).await {
                Ok(cards) => set_cards_by_status.set(board::group_cards(cards)),
                Err(e) => ctx.report_error(e),
            }
        });
    });

    // Drop handler covering same-column reorder and cross-column moves
    bind_global_mouseup(dnd, move |source: DragSource, target: DropTarget| {
        let Some(project_id) = store.selected_project_id().get_untracked() else {
            return;
        };
        let map = cards_by_status.get_untracked();

        let (target_status, slot) = match target {
            DropTarget::Slot { container, index } => (container, index),
            DropTarget::Container(container) => {
                let len = map.get(&container).map_or(0, |c| c.len());
                (container, len)
            }
        };

        if source.container == target_status {
            let Some(column) = map.get(&target_status) else { return };
            let to = resolve_slot(source, target_status, slot);
            if source.index == to {
                return;
            }
            let reordered = board::reorder_cards(column, source.index, to);
            let payload = board::card_sort_payload(&reordered);
            set_cards_by_status.update(|m| {
                m.insert(target_status, reordered);
            });
            spawn_local(async move {
                if let Err(e) = commands::bulk_sort_cards(project_id, &payload).await {
                    ctx.report_error(e);
                    ctx.reload();
                }
            });
        } else {
            let source_cards = map.get(&source.container).cloned().unwrap_or_default();
            let target_cards = map.get(&target_status).cloned().unwrap_or_default();
            if source.index >= source_cards.len() {
                return;
            }
            let card_id = source_cards[source.index].id;
            let (new_source, new_target) =
                board::move_card_between(&source_cards, &target_cards, source.index, slot, target_status);

            // Renumber both affected columns in one payload
            let mut payload = board::card_sort_payload(&new_source);
            payload.extend(board::card_sort_payload(&new_target));
            let sort_order = new_target
                .iter()
                .position(|c| c.id == card_id)
                .map_or(0, |i| i as i32);

            set_cards_by_status.update(|m| {
                m.insert(source.container, new_source);
                m.insert(target_status, new_target);
            });
            spawn_local(async move {
                let moved = commands::move_card(project_id, card_id, target_status, sort_order).await;
                let sorted = commands::bulk_sort_cards(project_id, &payload).await;
                if let Err(e) = moved.and(sorted) {
                    ctx.report_error(e);
                    ctx.reload();
                }
            });
        }
    });

    let cards_for = move |status_id: u32| {
        cards_by_status.get().get(&status_id).cloned().unwrap_or_default()
    };

    view! {
        <div class="kanban-board">
            <For
                each=move || store.statuses().get()
                key=|s| s.id
                children=move |status| {
                    let status_id = status.id;
                    let cards = Signal::derive(move || cards_for(status_id));
                    view! {
                        <StatusColumn
                            status=status
                            cards=cards
                            dnd=dnd
                            drag_disabled=drag_disabled
                            set_card_modal=set_card_modal
                        />
                    }
                }
            />

            {move || card_modal.get().map(|mode| view! {
                <CardModal mode=mode set_card_modal=set_card_modal />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_modal_locks_card_drag() {
        let (card_modal, set_card_modal) = signal(Option::<CardModalMode>::None);
        let (settings_pipeline, set_settings_pipeline) = signal(Option::<u32>::None);
        let settings_open = Signal::derive(move || settings_pipeline.get().is_some());
        let drag_disabled = drag_disabled_signal(card_modal, settings_open);

        assert!(!drag_disabled.get_untracked());

        set_settings_pipeline.set(Some(7));
        assert!(drag_disabled.get_untracked());

        set_settings_pipeline.set(None);
        set_card_modal.set(Some(CardModalMode::Create { status_id: 1, sort_order: 0 }));
        assert!(drag_disabled.get_untracked());
    }
}
