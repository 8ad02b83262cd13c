//! Playground Page
//!
//! Chat-style test bench for the backend's search, LLM, and urgency
//! detection endpoints. Every exchange keeps the raw JSON payload so the
//! full response can be inspected inline.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use wasm_bindgen::JsCast;

use crate::api;
use crate::store::{store_show_snack, use_app_store, AppStateStoreFields, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryType {
    EmbeddingsSearch,
    LlmResponse,
    UrgencyDetection,
}

impl QueryType {
    const ALL: [QueryType; 3] = [
        QueryType::EmbeddingsSearch,
        QueryType::LlmResponse,
        QueryType::UrgencyDetection,
    ];

    fn value(&self) -> &'static str {
        match self {
            QueryType::EmbeddingsSearch => "embeddings-search",
            QueryType::LlmResponse => "llm-response",
            QueryType::UrgencyDetection => "urgency-detection",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            QueryType::EmbeddingsSearch => "Embedding Search",
            QueryType::LlmResponse => "LLM Search",
            QueryType::UrgencyDetection => "Urgency Detection",
        }
    }

    fn from_value(value: &str) -> QueryType {
        Self::ALL
            .into_iter()
            .find(|q| q.value() == value)
            .unwrap_or(QueryType::EmbeddingsSearch)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Message {
    Question {
        query_type: &'static str,
        text: String,
    },
    Response {
        lines: Vec<String>,
        json: String,
    },
}

fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

#[component]
pub fn PlaygroundPage() -> impl IntoView {
    let store = use_app_store();

    let (messages, set_messages) = signal(Vec::<Message>::new());
    let (input, set_input) = signal(String::new());
    let (query_type, set_query_type) = signal(QueryType::EmbeddingsSearch);
    let (loading, set_loading) = signal(false);

    let push = move |message: Message| set_messages.update(|m| m.push(message));

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = input.get().trim().to_string();
        if text.is_empty() {
            return;
        }
        let Some(token) = store.token().get_untracked() else {
            return;
        };
        let kind = query_type.get_untracked();
        push(Message::Question {
            query_type: kind.label(),
            text: text.clone(),
        });
        set_input.set(String::new());
        set_loading.set(true);

        spawn_local(async move {
            let outcome: Result<Message, String> = match kind {
                QueryType::EmbeddingsSearch => {
                    api::embeddings_search(&text, &token).await.map(|resp| {
                        let lines = resp
                            .content_response
                            .iter()
                            .map(|(rank, item)| {
                                format!("[{rank}] {}: {}", item.retrieved_title, item.retrieved_text)
                            })
                            .collect();
                        Message::Response {
                            lines,
                            json: pretty_json(&resp),
                        }
                    })
                }
                QueryType::LlmResponse => api::llm_response(&text, &token).await.map(|resp| {
                    let line = resp.llm_response.clone().unwrap_or_else(|| {
                        let reason = resp.debug_info["reason"].as_str().unwrap_or("unknown");
                        format!("No LLM response. Reason: \"{reason}\". See json for details.")
                    });
                    Message::Response {
                        lines: vec![line],
                        json: pretty_json(&resp),
                    }
                }),
                QueryType::UrgencyDetection => {
                    api::urgency_detect(&text, &token).await.map(|resp| {
                        let line = match resp.is_urgent {
                            Some(true) => "Urgent 🚨".to_string(),
                            Some(false) => "Not Urgent 🟢".to_string(),
                            None => "No response. See json for details.".to_string(),
                        };
                        Message::Response {
                            lines: vec![line],
                            json: pretty_json(&resp),
                        }
                    })
                }
            };

            match outcome {
                Ok(message) => push(message),
                Err(e) => {
                    web_sys::console::error_1(&e.clone().into());
                    store_show_snack(&store, Severity::Error, format!("{} failed", kind.label()));
                    push(Message::Response {
                        lines: vec!["API call failed. See json for details.".to_string()],
                        json: serde_json::json!({ "error": e }).to_string(),
                    });
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="playground">
            <div class="message-list">
                {move || messages.get().into_iter().map(|message| match message {
                    Message::Question { query_type, text } => view! {
                        <div class="message question">
                            <span class="message-kind">{query_type}</span>
                            <p>{text}</p>
                        </div>
                    }.into_any(),
                    Message::Response { lines, json } => view! {
                        <div class="message response">
                            {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                            <details>
                                <summary>"json"</summary>
                                <pre>{json}</pre>
                            </details>
                        </div>
                    }.into_any(),
                }).collect_view()}
                {move || loading.get().then(|| view! {
                    <div class="message response skeleton">"..."</div>
                })}
            </div>

            <form class="playground-bar" on:submit=send>
                <select
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        set_query_type.set(QueryType::from_value(&select.value()));
                    }
                >
                    {QueryType::ALL.into_iter().map(|kind| view! {
                        <option
                            value=kind.value()
                            selected=move || query_type.get() == kind
                        >
                            {kind.label()}
                        </option>
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Ask a question..."
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input_el = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_input.set(input_el.value());
                    }
                />
                <button type="submit" disabled=move || loading.get()>"Send"</button>
            </form>
        </div>
    }
}
