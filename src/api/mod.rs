//! Backend API Wrappers
//!
//! Fetch bindings to the remote REST backend, organized by domain. All calls
//! are single fire-and-forget requests authenticated with a bearer token
//! passed in explicitly; there are no retries or timeouts.

mod auth;
mod content;
mod dashboard;
mod search;
mod tag;
mod urgency;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

// Re-export all public items
pub use auth::*;
pub use content::*;
pub use dashboard::*;
pub use search::*;
pub use tag::*;
pub use urgency::*;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Backend base URL, overridable at build time
pub fn backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

fn fmt_js(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Issue a request and fail on any non-2xx status
pub(crate) async fn send(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<(&str, String)>,
) -> Result<Response, String> {
    let url = format!("{}{}", backend_url(), path);

    let init = RequestInit::new();
    init.set_method(method);
    let headers = Headers::new().map_err(fmt_js)?;
    if let Some((content_type, payload)) = body {
        headers.append("Content-Type", content_type).map_err(fmt_js)?;
        init.set_body(&JsValue::from_str(&payload));
    }
    if let Some(token) = token {
        headers
            .append("Authorization", &format!("Bearer {token}"))
            .map_err(fmt_js)?;
    }
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(&url, &init).map_err(fmt_js)?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fmt_js)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response value".to_string())?;

    if response.ok() {
        Ok(response)
    } else {
        Err(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        ))
    }
}

/// Decode a JSON response body
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let promise = response.json().map_err(fmt_js)?;
    let value = JsFuture::from(promise).await.map_err(fmt_js)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, String> {
    let response = send("GET", path, Some(token), None).await?;
    decode(response).await
}

pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    token: &str,
    body: &B,
) -> Result<T, String> {
    let payload = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let response = send(method, path, Some(token), Some(("application/json", payload))).await?;
    decode(response).await
}
