//! Card Search Component
//!
//! Debounced search box in the header. Queries run 300ms after the last
//! keystroke and only from 3 characters on; picking a result jumps to
//! the card's project and pipeline.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::CardSearchPage;
use crate::store::{use_app_store, AppStateStoreFields};

const DEBOUNCE_MS: u32 = 300;
const MIN_QUERY_LEN: usize = 3;
const PAGE_SIZE: u32 = 10;

#[component]
pub fn CardSearch() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (query, set_query) = signal(String::new());
    let (page, set_page) = signal(1u32);
    let (results, set_results) = signal(Option::<CardSearchPage>::None);
    let (searching, set_searching) = signal(false);

    let run_search = move |q: String, page_num: u32| {
        set_searching.set(true);
        spawn_local(async move {
            match commands::search_cards(&q, page_num, PAGE_SIZE).await {
                Ok(found) => set_results.set(Some(found)),
                Err(e) => ctx.report_error(e),
            }
            set_searching.set(false);
        });
    };

    // Debounce: wait, then search only if the query hasn't changed since
    Effect::new(move |_| {
        let q = query.get();
        let page_num = page.get();
        if q.trim().len() < MIN_QUERY_LEN {
            set_results.set(None);
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if query.get_untracked() == q && page.get_untracked() == page_num {
                run_search(q, page_num);
            }
        });
    });

    let jump_to = move |project_id: u32, pipeline_id: u32| {
        store.selected_project_id().set(Some(project_id));
        store.selected_pipeline_id().set(Some(pipeline_id));
        set_query.set(String::new());
        set_results.set(None);
        ctx.reload();
        spawn_local(async move {
            let _ = commands::save_board_selection(Some(project_id), Some(pipeline_id)).await;
        });
    };

    view! {
        <div class="card-search">
            <input
                type="text"
                placeholder="Search cards (min 3 chars)"
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_page.set(1);
                    set_query.set(event_target_value(&ev));
                }
            />

            {move || results.get().map(|found| {
                let total_pages = found.total_pages;
                let current = found.page.max(1);
                view! {
                    <div class="search-results">
                        <Show when=move || searching.get()>
                            <div class="search-hint">"Searching..."</div>
                        </Show>
                        {if found.cards.is_empty() {
                            view! { <div class="search-hint">"No cards found"</div> }.into_any()
                        } else {
                            view! {
                                <For
                                    each=move || found.cards.clone()
                                    key=|r| r.id
                                    children=move |result| {
                                        let project_id = result.project_id;
                                        let pipeline_id = result.pipeline_id;
                                        let fragment = result.match_fragment.clone();
                                        view! {
                                            <div
                                                class="search-result"
                                                on:click=move |_| jump_to(project_id, pipeline_id)
                                            >
                                                <div class="search-result-title">{result.title.clone()}</div>
                                                <div class="search-result-path">
                                                    {format!(
                                                        "{} / {} / {}",
                                                        result.project_name, result.pipeline_name, result.status_name
                                                    )}
                                                </div>
                                                {fragment.map(|f| view! {
                                                    <div class="search-result-fragment">{f}</div>
                                                })}
                                            </div>
                                        }
                                    }
                                />
                            }.into_any()
                        }}

                        <Show when={move || total_pages > 1}>
                            <div class="search-paging">
                                <button
                                    disabled=move || current <= 1
                                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                                >
                                    "‹"
                                </button>
                                <span>{format!("{} / {}", current, total_pages)}</span>
                                <button
                                    disabled=move || current >= total_pages
                                    on:click=move |_| set_page.update(|p| *p += 1)
                                >
                                    "›"
                                </button>
                            </div>
                        </Show>
                    </div>
                }
            })}
        </div>
    }
}
