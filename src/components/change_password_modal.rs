//! Change Password Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{AppContext, UNAUTHORIZED_PREFIX};

#[component]
pub fn ChangePasswordModal(set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (current, set_current) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (done, set_done) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current_val = current.get();
        let new_val = new_password.get();
        let confirm_val = confirm.get();
        if current_val.is_empty() || new_val.is_empty() {
            set_error.set(Some("All fields are required".to_string()));
            return;
        }
        if new_val != confirm_val {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }

        set_error.set(None);
        spawn_local(async move {
            match commands::change_password(&current_val, &new_val).await {
                Ok(()) => set_done.set(true),
                Err(e) => {
                    if e.starts_with(UNAUTHORIZED_PREFIX) {
                        ctx.report_error(e);
                    } else {
                        set_error.set(Some(e));
                    }
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| set_open.set(false)>
            <div class="modal change-password-modal" on:click=move |ev| ev.stop_propagation()>
                {move || if done.get() {
                    view! {
                        <div class="password-done">
                            <p>"Password changed."</p>
                            <button on:click=move |_| set_open.set(false)>"Close"</button>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <form on:submit=on_submit>
                            <h3>"Change password"</h3>

                            {move || error.get().map(|msg| view! {
                                <div class="form-error">{msg}</div>
                            })}

                            <input
                                type="password"
                                placeholder="Current password"
                                prop:value=move || current.get()
                                on:input=move |ev| set_current.set(event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder="New password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder="Repeat new password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            />

                            <div class="modal-actions">
                                <button type="button" on:click=move |_| set_open.set(false)>"Cancel"</button>
                                <button type="submit">"Change"</button>
                            </div>
                        </form>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
