//! Urgency Rules Page
//!
//! Inline-editable list of urgency rules driven by the `list_edit`
//! controller. Enter commits, Escape cancels, and losing focus on a
//! persisted row cancels implicitly; drafts survive blur so half-typed new
//! rules are not lost.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::format_datetime;
use crate::list_edit::{CommitTarget, DeletePlan, RuleList};
use crate::store::{
    store_has_full_access, store_show_snack, use_app_store, AppStateStoreFields, Severity,
};

#[component]
pub fn UrgencyRulesPage() -> impl IntoView {
    let store = use_app_store();

    let (rules, set_rules) = signal(RuleList::new());
    // text of the row currently in edit mode; kept outside the list so
    // keystrokes do not re-render the rows
    let (edit_text, set_edit_text) = signal(String::new());

    Effect::new(move |_| {
        let Some(token) = store.token().get() else {
            return;
        };
        spawn_local(async move {
            match api::get_urgency_rule_list(&token).await {
                Ok(items) => set_rules.update(|l| l.replace_all(items)),
                Err(e) => {
                    web_sys::console::error_1(&e.into());
                    store_show_snack(&store, Severity::Error, "Failed to fetch urgency rules");
                }
            }
        });
    });

    let begin_edit = move |index: usize| {
        set_rules.update(|l| l.begin_edit(index));
        let list = rules.get_untracked();
        if list.is_editing(index) {
            set_edit_text.set(list.items()[index].urgency_rule_text.clone());
        }
    };

    let add_new = move |_| {
        set_rules.update(|l| l.add_draft());
        let list = rules.get_untracked();
        if let Some(index) = list.active_index() {
            set_edit_text.set(list.items()[index].urgency_rule_text.clone());
        }
    };

    let commit = move |index: usize| {
        let text = edit_text.get_untracked().trim().to_string();
        if text.is_empty() {
            store_show_snack(&store, Severity::Error, "Urgency rule text cannot be empty");
            return;
        }
        let Some(token) = store.token().get_untracked() else {
            return;
        };
        let mut target = None;
        set_rules.update(|l| {
            l.set_text(index, text);
            target = l.commit(index);
        });
        let Some(target) = target else {
            return;
        };
        spawn_local(async move {
            let result = match &target {
                CommitTarget::Create(text) => api::add_urgency_rule(text, &token).await,
                CommitTarget::Update(id, text) => {
                    api::update_urgency_rule(*id, text, &token).await
                }
            };
            match result {
                Ok(record) => set_rules.update(|l| l.apply_saved(index, record)),
                Err(e) => {
                    // no rollback: the edited text stays in place for retry
                    web_sys::console::error_1(&e.into());
                    store_show_snack(&store, Severity::Error, "Failed to save urgency rule");
                }
            }
        });
    };

    let cancel = move |index: usize| set_rules.update(|l| l.cancel(index));
    let blur = move |index: usize| set_rules.update(|l| l.blur(index));

    let delete = move |index: usize| {
        match rules.get_untracked().delete_plan(index) {
            Some(DeletePlan::Local) => set_rules.update(|l| l.remove(index)),
            Some(DeletePlan::Remote(rule_id)) => {
                let Some(token) = store.token().get_untracked() else {
                    return;
                };
                spawn_local(async move {
                    match api::delete_urgency_rule(rule_id, &token).await {
                        Ok(()) => set_rules.update(|l| l.remove(index)),
                        Err(e) => {
                            web_sys::console::error_1(&e.into());
                            store_show_snack(
                                &store,
                                Severity::Error,
                                "Failed to delete urgency rule",
                            );
                        }
                    }
                });
            }
            None => {}
        }
    };

    view! {
        <div class="urgency-rules-page">
            <div class="page-header">
                <h2>"Urgency Rules"</h2>
                <button
                    class="new-btn"
                    disabled=move || !store_has_full_access(&store)
                    on:click=add_new
                >
                    "New"
                </button>
            </div>

            <ul class="rule-list">
                {move || {
                    let list = rules.get();
                    let full_access = store_has_full_access(&store);
                    list.items().iter().cloned().enumerate().map(|(index, rule)| {
                        let editing = list.is_editing(index);
                        view! {
                            <li class="rule-row">
                                <span class="rule-index">{format!("#{}", index + 1)}</span>
                                {if editing {
                                    view! {
                                        <span class="rule-edit">
                                            <input
                                                type="text"
                                                class="rule-input"
                                                autofocus=true
                                                prop:value=move || edit_text.get()
                                                on:input=move |ev| {
                                                    let target = ev.target().unwrap();
                                                    let input = target
                                                        .dyn_ref::<web_sys::HtmlInputElement>()
                                                        .unwrap();
                                                    set_edit_text.set(input.value());
                                                }
                                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                    if ev.key() == "Enter" {
                                                        ev.prevent_default();
                                                        commit(index);
                                                    } else if ev.key() == "Escape" {
                                                        cancel(index);
                                                    }
                                                }
                                                on:blur=move |_| blur(index)
                                            />
                                            // mousedown fires before the input's blur
                                            <button
                                                class="save-btn"
                                                on:mousedown=move |_| commit(index)
                                            >
                                                "Save"
                                            </button>
                                        </span>
                                    }.into_any()
                                } else {
                                    view! {
                                        <span
                                            class="rule-text"
                                            on:dblclick=move |_| {
                                                if full_access {
                                                    begin_edit(index);
                                                }
                                            }
                                        >
                                            <span class="rule-primary">
                                                {rule.urgency_rule_text.clone()}
                                            </span>
                                            <span class="rule-secondary">
                                                {if rule.updated_datetime_utc.is_empty() {
                                                    "saving...".to_string()
                                                } else {
                                                    format!(
                                                        "Last updated: {}",
                                                        format_datetime(&rule.updated_datetime_utc),
                                                    )
                                                }}
                                            </span>
                                        </span>
                                        {full_access.then(|| view! {
                                            <span class="rule-actions">
                                                <button
                                                    class="edit-btn"
                                                    on:click=move |_| begin_edit(index)
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="delete-btn"
                                                    on:click=move |_| delete(index)
                                                >
                                                    "Delete"
                                                </button>
                                            </span>
                                        })}
                                    }.into_any()
                                }}
                            </li>
                        }
                    }).collect_view()
                }}
            </ul>
        </div>
    }
}
