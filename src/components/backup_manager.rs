//! Backup Manager Component
//!
//! Modal for the server-side Yandex Disk backup: connect via OAuth in
//! the system browser, toggle the schedule, run a backup now, disconnect.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::BackupStatus;

#[component]
pub fn BackupManager(set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (status, set_status) = signal(Option::<BackupStatus>::None);
    let (refresh, set_refresh) = signal(0u32);
    let (interval, set_interval) = signal(60u32);
    let (busy, set_busy) = signal(false);
    let (message, set_message) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let _ = refresh.get();
        spawn_local(async move {
            match commands::backup_status().await {
                Ok(loaded) => {
                    if loaded.interval_minutes > 0 {
                        set_interval.set(loaded.interval_minutes);
                    }
                    set_status.set(Some(loaded));
                }
                Err(e) => ctx.report_error(e),
            }
        });
    });

    let connect = move |_| {
        spawn_local(async move {
            match commands::backup_auth_url().await {
                Ok(url) => {
                    if let Err(e) = commands::open_external(&url).await {
                        ctx.report_error(e);
                    } else {
                        set_message.set(Some(
                            "Finish connecting in the browser, then refresh".to_string(),
                        ));
                    }
                }
                Err(e) => ctx.report_error(e),
            }
        });
    };

    let toggle_enabled = move |_| {
        let Some(current) = status.get_untracked() else { return };
        let enabled = !current.is_enabled;
        let interval_minutes = interval.get_untracked();
        spawn_local(async move {
            match commands::update_backup_settings(enabled, interval_minutes).await {
                Ok(()) => set_refresh.update(|v| *v += 1),
                Err(e) => ctx.report_error(e),
            }
        });
    };

    let save_interval = move |_| {
        let Some(current) = status.get_untracked() else { return };
        let interval_minutes = interval.get_untracked();
        spawn_local(async move {
            match commands::update_backup_settings(current.is_enabled, interval_minutes).await {
                Ok(()) => set_refresh.update(|v| *v += 1),
                Err(e) => ctx.report_error(e),
            }
        });
    };

    let backup_now = move |_| {
        set_busy.set(true);
        spawn_local(async move {
            match commands::create_backup().await {
                Ok(()) => {
                    set_message.set(Some("Backup started".to_string()));
                    set_refresh.update(|v| *v += 1);
                }
                Err(e) => ctx.report_error(e),
            }
            set_busy.set(false);
        });
    };

    let disconnect = move |_| {
        spawn_local(async move {
            match commands::disconnect_backup().await {
                Ok(()) => set_refresh.update(|v| *v += 1),
                Err(e) => ctx.report_error(e),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| set_open.set(false)>
            <div class="modal backup-modal" on:click=move |ev| ev.stop_propagation()>
                <h3>"Cloud backup"</h3>

                {move || message.get().map(|msg| view! {
                    <div class="backup-message">{msg}</div>
                })}

                {move || match status.get() {
                    None => view! { <p>"Loading..."</p> }.into_any(),
                    Some(s) if !s.is_configured => view! {
                        <div class="backup-connect">
                            <p>"Connect a Yandex Disk account to back up your boards."</p>
                            <button on:click=connect>"Connect Yandex Disk"</button>
                            <button on:click=move |_| set_refresh.update(|v| *v += 1)>"Refresh"</button>
                        </div>
                    }.into_any(),
                    Some(s) => {
                        let enabled = s.is_enabled;
                        let count = s.backup_count;
                        let last = (!s.last_backup.is_empty())
                            .then(|| format!("Last backup: {}", s.last_backup));
                        let next = (enabled && !s.next_backup.is_empty())
                            .then(|| format!("Next backup: {}", s.next_backup));
                        view! {
                            <div class="backup-details">
                                <p>{format!("Backups: {}", count)}</p>
                                {last.map(|text| view! { <p>{text}</p> })}
                                {next.map(|text| view! { <p>{text}</p> })}

                                <label class="backup-toggle">
                                    <input type="checkbox" checked=enabled on:change=toggle_enabled />
                                    "Scheduled backups"
                                </label>

                                <div class="backup-interval">
                                    <input
                                        type="number"
                                        min="5"
                                        prop:value=move || interval.get().to_string()
                                        on:input=move |ev| {
                                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                                set_interval.set(v.max(5));
                                            }
                                        }
                                    />
                                    <span>"minutes"</span>
                                    <button on:click=save_interval>"Save interval"</button>
                                </div>

                                <div class="backup-actions">
                                    <button disabled=move || busy.get() on:click=backup_now>"Back up now"</button>
                                    <button class="danger" on:click=disconnect>"Disconnect"</button>
                                </div>
                            </div>
                        }.into_any()
                    }
                }}

                <div class="modal-actions">
                    <button type="button" on:click=move |_| set_open.set(false)>"Close"</button>
                </div>
            </div>
        </div>
    }
}
