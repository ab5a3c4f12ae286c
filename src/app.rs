//! Nadder Frontend App
//!
//! Auth gate: login screen until a session exists, then the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::context::AppContext;
use crate::components::{Dashboard, LoginForm};
use crate::models::User;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (user, set_user) = signal(Option::<User>::None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (last_error, set_last_error) = signal(Option::<String>::None);
    let (session_checked, set_session_checked) = signal(false);

    // Provide context to all children
    provide_context(AppContext::new(
        (user, set_user),
        (reload_trigger, set_reload_trigger),
        (last_error, set_last_error),
    ));
    provide_context(Store::new(AppState::new()));

    // Restore a previous session on startup
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(Some(restored)) = commands::restore_session().await {
                set_user.set(Some(restored));
            }
            set_session_checked.set(true);
        });
    });

    view! {
        <div class="app-layout">
            <Show when=move || session_checked.get() fallback=|| view! { <div class="loading-screen">"Loading..."</div> }>
                <Show
                    when=move || user.get().is_some()
                    fallback=|| view! { <LoginForm /> }
                >
                    <Dashboard />
                </Show>
            </Show>
        </div>
    }
}
