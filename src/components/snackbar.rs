//! Snackbar Component
//!
//! Transient banner for success/info/error feedback, auto-hidden after six
//! seconds unless a newer message replaced it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_clear_snack, use_app_store, AppStateStoreFields};

const AUTO_HIDE_MS: u32 = 6_000;

#[component]
pub fn Snackbar() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| {
        if let Some(current) = store.snackbar().get() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_HIDE_MS).await;
                // only clear if this message is still the one showing
                if store.snackbar().get_untracked().as_ref() == Some(&current) {
                    store.snackbar().set(None);
                }
            });
        }
    });

    view! {
        {move || store.snackbar().get().map(|message| {
            view! {
                <div class=message.severity.class()>
                    <span class="snackbar-text">{message.text.clone()}</span>
                    <button class="snackbar-close" on:click=move |_| store_clear_snack(&store)>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
