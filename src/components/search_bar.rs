//! Search Bar Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn SearchBar(
    search_term: ReadSignal<String>,
    set_search_term: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-bar"
            placeholder="Search by title or content..."
            prop:value=move || search_term.get()
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                set_search_term.set(input.value());
            }
        />
    }
}
