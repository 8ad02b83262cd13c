//! Page Navigation Component
//!
//! Local pagination controls over the filtered card list.

use leptos::prelude::*;

#[component]
pub fn PageNavigation(
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    #[prop(into)] max_pages: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="page-navigation">
            <button
                disabled=move || page.get() <= 1
                on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "‹"
            </button>
            <span class="page-label">
                {move || format!("{} / {}", page.get(), max_pages.get())}
            </span>
            <button
                disabled=move || page.get() >= max_pages.get()
                on:click=move |_| {
                    let max = max_pages.get();
                    set_page.update(|p| *p = (*p + 1).min(max));
                }
            >
                "›"
            </button>
        </div>
    }
}
