//! Tag Filter Component
//!
//! Any-of tag selection rendered as toggleable chips.

use leptos::prelude::*;

use crate::models::Tag;

#[component]
pub fn TagFilter(
    #[prop(into)] tags: Signal<Vec<Tag>>,
    selected: ReadSignal<Vec<i32>>,
    set_selected: WriteSignal<Vec<i32>>,
) -> impl IntoView {
    let toggle = move |tag_id: i32| {
        set_selected.update(|ids| {
            if let Some(pos) = ids.iter().position(|id| *id == tag_id) {
                ids.remove(pos);
            } else {
                ids.push(tag_id);
            }
        });
    };

    view! {
        <div class="tag-filter">
            <span class="tag-filter-label">"Tags:"</span>
            {move || tags.get().into_iter().map(|tag| {
                let tag_id = tag.tag_id;
                let active = move || selected.get().contains(&tag_id);
                view! {
                    <button
                        class=move || if active() { "tag-chip active" } else { "tag-chip" }
                        on:click=move |_| toggle(tag_id)
                    >
                        {tag.tag_name.clone()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
