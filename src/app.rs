//! Admin Console App
//!
//! Root component: provides the session store, gates everything behind
//! login, and switches between pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    ContentEditorPage, ContentListPage, DashboardPage, LoginForm, NavBar, PlaygroundPage,
    Snackbar, UrgencyRulesPage,
};
use crate::store::{AppState, AppStateStoreFields, Page};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    // load the tag list once a session exists
    Effect::new(move |_| {
        let Some(token) = store.token().get() else {
            return;
        };
        spawn_local(async move {
            match api::get_tag_list(&token).await {
                Ok(tags) => store.tags().set(tags),
                Err(e) => web_sys::console::error_1(&e.into()),
            }
        });
    });

    view! {
        <NavBar />
        <Snackbar />
        <main class="page">
            {move || match store.token().get() {
                None => view! { <LoginForm /> }.into_any(),
                Some(_) => match store.page().get() {
                    Page::ContentList => view! { <ContentListPage /> }.into_any(),
                    Page::ContentEdit(content_id) => {
                        view! { <ContentEditorPage content_id=content_id /> }.into_any()
                    }
                    Page::UrgencyRules => view! { <UrgencyRulesPage /> }.into_any(),
                    Page::Playground => view! { <PlaygroundPage /> }.into_any(),
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                },
            }}
        </main>
    }
}
