//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::store::{store_login, use_app_store};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            set_error.set(Some("Username and password are required".to_string()));
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(resp) => {
                    set_error.set(None);
                    store_login(&store, resp.access_token, resp.access_level);
                }
                Err(e) => {
                    web_sys::console::error_1(&e.into());
                    set_error.set(Some("Login failed. Check your credentials.".to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="login-form" on:submit=submit>
            <h2>"Sign in"</h2>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_username.set(input.value());
                }
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_password.set(input.value());
                }
            />
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
