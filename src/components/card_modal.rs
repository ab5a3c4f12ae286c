//! Card Modal Component
//!
//! Shared create/edit dialog for cards, with a markdown preview toggle
//! for the description.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateCardArgs};
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::markdown;
use crate::models::Card;
use crate::store::{use_app_store, AppStateStoreFields};

/// What the modal is doing
#[derive(Clone, PartialEq)]
pub enum CardModalMode {
    Create { status_id: u32, sort_order: i32 },
    Edit { card: Card },
}

#[component]
pub fn CardModal(
    mode: CardModalMode,
    set_card_modal: WriteSignal<Option<CardModalMode>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (initial_title, initial_description, editing_card) = match &mode {
        CardModalMode::Create { .. } => (String::new(), String::new(), None),
        CardModalMode::Edit { card } => (
            card.title.clone(),
            card.description.clone().unwrap_or_default(),
            Some(card.clone()),
        ),
    };
    let is_edit = editing_card.is_some();
    let card_id = editing_card.as_ref().map(|c| c.id);

    let (title, set_title) = signal(initial_title);
    let (description, set_description) = signal(initial_description);
    let (show_preview, set_show_preview) = signal(false);
    let (busy, set_busy) = signal(false);

    let close = move || set_card_modal.set(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_val = title.get();
        if title_val.trim().is_empty() {
            return;
        }
        let description_val = description.get();
        let Some(project_id) = store.selected_project_id().get_untracked() else {
            return;
        };
        let mode = mode.clone();

        set_busy.set(true);
        spawn_local(async move {
            let result = match &mode {
                CardModalMode::Create { status_id, sort_order } => {
                    let Some(pipeline_id) = store.selected_pipeline_id().get_untracked() else {
                        return;
                    };
                    let desc = (!description_val.is_empty()).then_some(description_val.as_str());
                    commands::create_card(&CreateCardArgs {
                        project_id,
                        pipeline_id,
                        status_id: *status_id,
                        title: &title_val,
                        description: desc,
                        sort_order: *sort_order,
                    })
                    .await
                    .map(|_| ())
                }
                CardModalMode::Edit { card } => commands::update_card(
                    project_id,
                    card.id,
                    Some(&title_val),
                    Some(&description_val),
                    None,
                )
                .await
                .map(|_| ()),
            };
            set_busy.set(false);
            match result {
                Ok(()) => {
                    close();
                    ctx.reload();
                }
                Err(e) => ctx.report_error(e),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div class="modal card-modal" on:click=move |ev| ev.stop_propagation()>
                <form on:submit=on_submit>
                    <h3>{if is_edit { "Edit card" } else { "New card" }}</h3>

                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />

                    <div class="description-toolbar">
                        <button
                            type="button"
                            class=move || if show_preview.get() { "toggle-btn" } else { "toggle-btn active" }
                            on:click=move |_| set_show_preview.set(false)
                        >
                            "Write"
                        </button>
                        <button
                            type="button"
                            class=move || if show_preview.get() { "toggle-btn active" } else { "toggle-btn" }
                            on:click=move |_| set_show_preview.set(true)
                        >
                            "Preview"
                        </button>
                    </div>

                    {move || if show_preview.get() {
                        view! {
                            <div
                                class="description-preview"
                                inner_html=markdown::parse_markdown(&description.get())
                            ></div>
                        }.into_any()
                    } else {
                        view! {
                            <textarea
                                placeholder="Description (markdown)"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        }.into_any()
                    }}

                    <div class="modal-actions">
                        {card_id.map(|id| view! {
                            <DeleteConfirmButton
                                button_class="card-delete-btn"
                                on_confirm=move |_| {
                                    let Some(project_id) = store.selected_project_id().get_untracked() else {
                                        return;
                                    };
                                    spawn_local(async move {
                                        match commands::delete_card(project_id, id).await {
                                            Ok(()) => {
                                                close();
                                                ctx.reload();
                                            }
                                            Err(e) => ctx.report_error(e),
                                        }
                                    });
                                }
                            />
                        })}
                        <button type="button" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" disabled=move || busy.get()>
                            {if is_edit { "Save" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
