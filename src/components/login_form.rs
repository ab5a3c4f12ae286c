//! Login Form Component
//!
//! Login/register screen shown until a session exists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (registering, set_registering) = signal(false);
    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get();
        let password_val = password.get();
        let name_val = name.get();
        if email_val.is_empty() || password_val.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }
        let is_register = registering.get();
        if is_register && name_val.is_empty() {
            set_error.set(Some("Name is required".to_string()));
            return;
        }

        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = if is_register {
                commands::register(&email_val, &name_val, &password_val).await
            } else {
                commands::login(&email_val, &password_val).await
            };
            match result {
                Ok(user) => ctx.set_user(Some(user)),
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-screen">
            <form class="login-form" on:submit=on_submit>
                <h1>"Nadder"</h1>
                <h2>{move || if registering.get() { "Create account" } else { "Sign in" }}</h2>

                {move || error.get().map(|msg| view! {
                    <div class="form-error">{msg}</div>
                })}

                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <Show when=move || registering.get()>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </Show>

                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button type="submit" disabled=move || busy.get()>
                    {move || if registering.get() { "Register" } else { "Login" }}
                </button>

                <button
                    type="button"
                    class="link-btn"
                    on:click=move |_| {
                        set_error.set(None);
                        set_registering.update(|v| *v = !*v);
                    }
                >
                    {move || if registering.get() {
                        "Already have an account? Sign in"
                    } else {
                        "No account yet? Register"
                    }}
                </button>
            </form>
        </div>
    }
}
