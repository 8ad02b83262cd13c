//! Download Modal Component
//!
//! Confirm dialog that snapshots every content record to a CSV file and
//! hands it to the browser as a Blob download.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};

use crate::api;
use crate::csv_export;
use crate::listing::MAX_CARDS_TO_FETCH;
use crate::store::{store_show_snack, use_app_store, AppStateStoreFields, Severity};

fn trigger_download(csv: &str, filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(csv));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?;
    let anchor: web_sys::HtmlAnchorElement = anchor
        .dyn_into()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let body = document.body().ok_or_else(|| "no body".to_string())?;
    body.append_child(&anchor).map_err(|e| format!("{e:?}"))?;
    anchor.click();
    body.remove_child(&anchor).map_err(|e| format!("{e:?}"))?;
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[component]
pub fn DownloadModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let (busy, set_busy) = signal(false);

    let download = move |_| {
        let Some(token) = store.token().get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            let outcome: Result<bool, String> = async {
                let cards = api::get_content_list(&token, 0, MAX_CARDS_TO_FETCH).await?;
                if cards.is_empty() {
                    return Ok(false);
                }
                let tags = api::get_tag_list(&token).await?;
                let csv = csv_export::build_csv(&cards, &tags);
                let filename = csv_export::export_filename(chrono::Local::now().naive_local());
                trigger_download(&csv, &filename)?;
                Ok(true)
            }
            .await;

            match outcome {
                Ok(true) => {}
                Ok(false) => store_show_snack(&store, Severity::Info, "No data to download"),
                Err(e) => {
                    web_sys::console::error_1(&e.into());
                    store_show_snack(&store, Severity::Error, "Failed to download content");
                }
            }
            set_busy.set(false);
            set_open.set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h3>"Download all contents?"</h3>
                    <p>"This action will download all contents as a CSV file."</p>
                    <div class="modal-actions">
                        <button on:click=move |_| set_open.set(false)>"Cancel"</button>
                        <button class="confirm-btn" disabled=move || busy.get() on:click=download>
                            {move || if busy.get() { "Downloading..." } else { "Download" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
