//! Content Editor Component
//!
//! Add/edit form for a single content record with client-side required-field
//! validation. Saving navigates back to the list with a success snackbar.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::models::ContentBody;
use crate::store::{store_show_snack, use_app_store, AppStateStoreFields, Page, Severity};

pub const LANGUAGE_OPTIONS: &[&str] = &["ENGLISH", "SWAHILI", "HINDI"];

const MAX_TITLE_CHARS: usize = 150;
const MAX_TEXT_CHARS: usize = 2000;

#[component]
pub fn ContentEditorPage(content_id: Option<i32>) -> impl IntoView {
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (text, set_text) = signal(String::new());
    let (language, set_language) = signal(LANGUAGE_OPTIONS[0].to_string());
    let (metadata, set_metadata) = signal(serde_json::json!({}));
    let (is_loading, set_is_loading) = signal(content_id.is_some());
    let (title_error, set_title_error) = signal(false);
    let (text_error, set_text_error) = signal(false);
    let (save_error, set_save_error) = signal(false);

    // load the existing record when editing
    Effect::new(move |_| {
        let Some(id) = content_id else {
            return;
        };
        let Some(token) = store.token().get() else {
            return;
        };
        spawn_local(async move {
            match api::get_content(id, &token).await {
                Ok(content) => {
                    set_title.set(content.content_title);
                    set_text.set(content.content_text);
                    set_language.set(content.content_language);
                    set_metadata.set(content.content_metadata);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&e.into());
                    store_show_snack(&store, Severity::Error, "Failed to fetch content");
                    set_is_loading.set(false);
                }
            }
        });
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        let text_value = text.get();
        set_title_error.set(title_value.trim().is_empty());
        set_text_error.set(text_value.trim().is_empty());
        if title_value.trim().is_empty() || text_value.trim().is_empty() {
            return;
        }

        let Some(token) = store.token().get_untracked() else {
            return;
        };
        let body = ContentBody {
            content_title: title_value,
            content_text: text_value,
            content_language: language.get(),
            content_metadata: metadata.get(),
        };
        spawn_local(async move {
            let result = match content_id {
                None => api::create_content(&body, &token).await,
                Some(id) => api::edit_content(id, &body, &token).await,
            };
            match result {
                Ok(saved) => {
                    set_save_error.set(false);
                    let id = saved.content_id.unwrap_or_default();
                    let verb = if content_id.is_none() { "created" } else { "updated" };
                    store_show_snack(&store, Severity::Success, format!("Content #{id} {verb}"));
                    store.page().set(Page::ContentList);
                }
                Err(e) => {
                    web_sys::console::error_1(&e.into());
                    set_save_error.set(true);
                }
            }
        });
    };

    view! {
        <div class="content-editor">
            <div class="editor-header">
                <button class="back-btn" on:click=move |_| store.page().set(Page::ContentList)>
                    "‹ Back"
                </button>
                <h2>{if content_id.is_none() { "Add Content" } else { "Edit Content" }}</h2>
            </div>

            {move || if is_loading.get() {
                view! { <div class="editor-loading">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <form class="editor-form" on:submit=save>
                        <label class="editor-label">"Title"</label>
                        <input
                            type="text"
                            maxlength=MAX_TITLE_CHARS.to_string()
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                        />
                        {move || title_error.get().then(|| view! {
                            <p class="form-error">"Title is required"</p>
                        })}

                        <label class="editor-label">"Content"</label>
                        <textarea
                            rows="12"
                            maxlength=MAX_TEXT_CHARS.to_string()
                            prop:value=move || text.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_text.set(input.value());
                            }
                        ></textarea>
                        {move || text_error.get().then(|| view! {
                            <p class="form-error">"Content text is required"</p>
                        })}

                        <label class="editor-label">"Language"</label>
                        <select
                            on:change=move |ev| {
                                let target = ev.target().unwrap();
                                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                set_language.set(select.value());
                            }
                        >
                            {LANGUAGE_OPTIONS.iter().map(|option| view! {
                                <option
                                    value=*option
                                    selected=move || language.get() == *option
                                >
                                    {*option}
                                </option>
                            }).collect_view()}
                        </select>

                        {move || save_error.get().then(|| view! {
                            <p class="form-error">"Failed to save content. Please try again."</p>
                        })}

                        <button type="submit" class="save-btn">"Save"</button>
                    </form>
                }.into_any()
            }}
        </div>
    }
}
