//! Content Card Component
//!
//! One card in the content grid: title, truncated body, tag chips, vote
//! counts, and edit/delete actions for full-access users.

use leptos::prelude::*;

use crate::components::{format_datetime, DeleteConfirmButton};
use crate::models::{Content, Tag};
use crate::store::{use_app_store, AppStateStoreFields, Page};

const PREVIEW_CHARS: usize = 160;

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let cut: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}…")
    } else {
        text.to_string()
    }
}

#[component]
pub fn ContentCard(
    card: Content,
    tags: Vec<Tag>,
    edit_access: bool,
    #[prop(into)] on_delete: Callback<i32>,
) -> impl IntoView {
    let store = use_app_store();
    let content_id = card.content_id;
    let tag_names: Vec<String> = tags
        .iter()
        .filter(|t| card.content_tags.contains(&t.tag_id))
        .map(|t| t.tag_name.clone())
        .collect();

    view! {
        <div class="content-card">
            <h3 class="card-title">{card.content_title.clone()}</h3>
            <p class="card-text">{preview(&card.content_text)}</p>
            <div class="card-tags">
                {tag_names.into_iter().map(|name| view! {
                    <span class="tag-chip small">{name}</span>
                }).collect_view()}
            </div>
            <div class="card-footer">
                <span class="card-votes">
                    {format!("+{} / -{}", card.positive_votes, card.negative_votes)}
                </span>
                <span class="card-updated">
                    {format!("Last updated: {}", format_datetime(&card.updated_datetime_utc))}
                </span>
            </div>
            {edit_access.then(|| view! {
                <div class="card-actions">
                    <button
                        class="edit-btn"
                        on:click=move |_| store.page().set(Page::ContentEdit(content_id))
                    >
                        "Edit"
                    </button>
                    {content_id.map(|id| view! {
                        <DeleteConfirmButton
                            button_class="delete-btn"
                            on_confirm=Callback::new(move |_: ()| on_delete.run(id))
                        />
                    })}
                </div>
            })}
        </div>
    }
}
