//! Content List Page
//!
//! Fetches the full collection (bounded by MAX_CARDS_TO_FETCH), filters it
//! client-side by search term and tags, and pages through the result
//! locally. Responses from superseded fetches are discarded via FetchGuard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ContentCard, DownloadModal, PageNavigation, SearchBar, TagFilter};
use crate::listing::{self, FetchGuard, CARDS_PER_PAGE, MAX_CARDS_TO_FETCH};
use crate::models::Content;
use crate::store::{
    store_has_full_access, store_reload_contents, store_show_snack, use_app_store,
    AppStateStoreFields, Page, Severity,
};

#[component]
pub fn ContentListPage() -> impl IntoView {
    let store = use_app_store();

    let (search_term, set_search_term) = signal(String::new());
    let (filter_tag_ids, set_filter_tag_ids) = signal(Vec::<i32>::new());
    let (page, set_page) = signal(1usize);
    let (cards, set_cards) = signal(Vec::<Content>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (download_open, set_download_open) = signal(false);

    let guard = StoredValue::new(FetchGuard::new());

    // refetch whenever the search term, tag filter, or reload counter change
    Effect::new(move |_| {
        let Some(token) = store.token().get() else {
            return;
        };
        let term = search_term.get();
        let tag_ids = filter_tag_ids.get();
        let _ = store.content_reload().get();

        guard.update_value(|g| {
            g.issue();
        });
        let ticket = guard.with_value(|g| g.current());
        set_is_loading.set(true);
        spawn_local(async move {
            match api::get_content_list(&token, 0, MAX_CARDS_TO_FETCH).await {
                Ok(data) => {
                    if !guard.with_value(|g| g.is_current(ticket)) {
                        return;
                    }
                    let filtered = listing::filter_contents(&data, &term, &tag_ids);
                    let max = listing::page_count(filtered.len());
                    set_cards.set(filtered);
                    set_page.update(|p| *p = (*p).clamp(1, max));
                    set_is_loading.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&e.into());
                    if guard.with_value(|g| g.is_current(ticket)) {
                        store_show_snack(&store, Severity::Error, "Failed to fetch content");
                        set_is_loading.set(false);
                    }
                }
            }
        });
    });

    let delete_card = Callback::new(move |content_id: i32| {
        let Some(token) = store.token().get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_content(content_id, &token).await {
                Ok(()) => {
                    store_show_snack(
                        &store,
                        Severity::Success,
                        format!("Content #{content_id} deleted successfully"),
                    );
                    store_reload_contents(&store);
                }
                Err(e) => {
                    web_sys::console::error_1(&e.into());
                    store_show_snack(
                        &store,
                        Severity::Error,
                        format!("Failed to delete content #{content_id}"),
                    );
                }
            }
        });
    });

    let max_pages = Signal::derive(move || listing::page_count(cards.get().len()));
    let all_tags = Signal::derive(move || store.tags().get());

    view! {
        <div class="content-page">
            <SearchBar search_term=search_term set_search_term=set_search_term />
            <TagFilter tags=all_tags selected=filter_tag_ids set_selected=set_filter_tag_ids />

            <div class="utility-strip">
                <button
                    class="download-btn"
                    disabled=move || !store_has_full_access(&store)
                    on:click=move |_| set_download_open.set(true)
                >
                    "Download"
                </button>
                <button
                    class="new-btn"
                    disabled=move || !store_has_full_access(&store)
                    on:click=move |_| store.page().set(Page::ContentEdit(None))
                >
                    "New"
                </button>
            </div>
            <DownloadModal open=download_open set_open=set_download_open />

            {move || if is_loading.get() {
                view! { <div class="card-grid loading">"Loading..."</div> }.into_any()
            } else {
                let all = cards.get();
                let visible = listing::page_slice(&all, page.get()).to_vec();
                let tags = store.tags().get();
                let edit_access = store_has_full_access(&store);
                if visible.is_empty() {
                    view! { <div class="card-grid empty">"No content found"</div> }.into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {visible.into_iter().map(|card| view! {
                                <ContentCard
                                    card=card
                                    tags=tags.clone()
                                    edit_access=edit_access
                                    on_delete=delete_card
                                />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}

            <PageNavigation page=page set_page=set_page max_pages=max_pages />
            <p class="card-count">
                {move || {
                    let n = cards.get().len();
                    format!("{} contents, {} per page", n, CARDS_PER_PAGE)
                }}
            </p>
        </div>
    }
}
