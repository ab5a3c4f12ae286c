//! Create Pipeline Modal
//!
//! Name and color for a new pipeline, appended after the existing ones.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreatePipelineArgs};
use crate::components::{ColorPicker, COLOR_PALETTE};
use crate::context::AppContext;
use crate::store::{use_app_store, store_add_pipeline, store_select_pipeline, AppStateStoreFields};

#[component]
pub fn CreatePipelineModal(set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (color, set_color) = signal(COLOR_PALETTE[0].to_string());

    let close = move || set_open.set(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_val = name.get();
        if name_val.trim().is_empty() {
            return;
        }
        let color_val = color.get();
        let Some(project_id) = store.selected_project_id().get_untracked() else {
            return;
        };
        // Pipelines are 1-based; append at the end
        let sort_order = store.pipelines().get_untracked().len() as i32 + 1;

        spawn_local(async move {
            match commands::create_pipeline(&CreatePipelineArgs {
                project_id,
                name: &name_val,
                color: &color_val,
                sort_order,
            })
            .await
            {
                Ok(created) => {
                    let id = created.id;
                    store_add_pipeline(&store, created);
                    store_select_pipeline(&store, Some(id));
                    let _ = commands::save_board_selection(Some(project_id), Some(id)).await;
                    close();
                }
                Err(e) => ctx.report_error(e),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div class="modal pipeline-modal" on:click=move |ev| ev.stop_propagation()>
                <form on:submit=on_submit>
                    <h3>"New pipeline"</h3>

                    <input
                        type="text"
                        placeholder="Pipeline name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <ColorPicker color=color set_color=set_color />

                    <div class="modal-actions">
                        <button type="button" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit">"Create"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
