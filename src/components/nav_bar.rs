//! Navigation Bar Component

use leptos::prelude::*;

use crate::store::{store_logout, use_app_store, AppStateStoreFields, Page};

const NAV_LINKS: &[(&str, Page)] = &[
    ("Manage Content", Page::ContentList),
    ("Urgency Rules", Page::UrgencyRules),
    ("Playground", Page::Playground),
    ("Dashboard", Page::Dashboard),
];

fn is_active(current: Page, link: Page) -> bool {
    match (current, link) {
        // the editor belongs to the content section
        (Page::ContentEdit(_), Page::ContentList) => true,
        (current, link) => current == link,
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <header class="nav-bar">
            <span class="nav-title">"Question Answering Admin"</span>
            {move || store.token().get().map(|_| view! {
                <nav class="nav-links">
                    {NAV_LINKS.iter().map(|(label, target)| {
                        let target = *target;
                        view! {
                            <button
                                class=move || {
                                    if is_active(store.page().get(), target) {
                                        "nav-link active"
                                    } else {
                                        "nav-link"
                                    }
                                }
                                on:click=move |_| store.page().set(target)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                    <button class="nav-link logout" on:click=move |_| store_logout(&store)>
                        "Logout"
                    </button>
                </nav>
            })}
        </header>
    }
}
